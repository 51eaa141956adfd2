//! 日志专用环形缓冲区

use crate::logger::LogSink;
use crate::record::Record;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// 环形缓冲区统计信息
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RingBufferStats {
    pub record_count: usize,
    /// 因缓冲区满而丢弃的记录数
    pub dropped_count: usize,
    pub capacity: usize,
}

/// 日志环形缓冲区
///
/// 缓冲区满时新记录覆盖最旧的记录（FIFO）。
pub struct LogRingBuffer {
    inner: Mutex<VecDeque<Record>>,
    capacity: usize,
    dropped: AtomicUsize,
}

impl LogRingBuffer {
    pub fn new(capacity: usize) -> Arc<Self> {
        Arc::new(LogRingBuffer {
            inner: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
            dropped: AtomicUsize::new(0),
        })
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Record>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn push(&self, record: Record) {
        if self.capacity == 0 {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return;
        }
        let mut inner = self.lock();
        if inner.len() >= self.capacity {
            inner.pop_front();
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
        inner.push_back(record);
    }

    /// 获取当前所有记录（按时间顺序）
    pub fn dump_records(&self) -> Vec<Record> {
        self.lock().iter().cloned().collect()
    }

    /// 将日志转储为多行字符串
    pub fn dump(&self) -> String {
        self.lock()
            .iter()
            .map(Record::format)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 是否存在包含指定片段的记录
    pub fn contains(&self, needle: &str) -> bool {
        self.lock().iter().any(|r| r.message.contains(needle))
    }

    pub fn clear(&self) {
        self.lock().clear();
        self.dropped.store(0, Ordering::Relaxed);
    }

    pub fn stats(&self) -> RingBufferStats {
        RingBufferStats {
            record_count: self.len(),
            dropped_count: self.dropped_count(),
            capacity: self.capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn dropped_count(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl LogSink for Arc<LogRingBuffer> {
    fn write(&self, record: &Record) {
        self.push(record.clone());
    }
}
