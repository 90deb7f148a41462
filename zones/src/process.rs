use hashbrown::HashMap;
use spin::Mutex;

use crate::zone::{Pid, ZoneId};

/// 外部进程表的成员关系接缝
///
/// 注册表不拥有进程表；destroy 的忙检查与 enter 的成员变更都经由
/// 这个 trait 进行。实现必须自行完成内部同步，并且**不得**回调
/// 注册表（锁序恒为 注册表 -> 进程表，见锁纪律）。
///
/// 成员关系可能与忙检查的扫描并发变化：忙检查是尽力而为的，
/// 不是事务性保证。
pub trait ProcessRoster: Send + Sync {
    /// 查询执行单元当前所属的区域；未登记的执行单元视为根区域成员
    fn zone_of(&self, pid: Pid) -> ZoneId;

    /// 设置执行单元的区域成员关系
    fn set_zone(&self, pid: Pid, zone: ZoneId);

    /// 指定区域内是否还有存活的执行单元
    fn has_member(&self, zone: ZoneId) -> bool;
}

/// 进程表的参考实现
///
/// pid -> zone 的映射，互斥锁保护。新登记的执行单元从根区域开始。
pub struct ProcessTable {
    inner: Mutex<HashMap<Pid, ZoneId>>,
}

impl ProcessTable {
    pub fn new() -> Self {
        return Self {
            inner: Mutex::new(HashMap::new()),
        };
    }

    /// 登记一个新的执行单元（出生于根区域）
    pub fn register(&self, pid: Pid) {
        self.inner.lock().insert(pid, ZoneId::ROOT);
    }

    /// 注销一个执行单元（进程退出）
    pub fn unregister(&self, pid: Pid) {
        self.inner.lock().remove(&pid);
    }
}

impl Default for ProcessTable {
    fn default() -> Self {
        return Self::new();
    }
}

impl ProcessRoster for ProcessTable {
    fn zone_of(&self, pid: Pid) -> ZoneId {
        return self
            .inner
            .lock()
            .get(&pid)
            .copied()
            .unwrap_or(ZoneId::ROOT);
    }

    fn set_zone(&self, pid: Pid, zone: ZoneId) {
        self.inner.lock().insert(pid, zone);
    }

    fn has_member(&self, zone: ZoneId) -> bool {
        return self.inner.lock().values().any(|z| *z == zone);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pid_starts_in_root() {
        let table = ProcessTable::new();
        table.register(Pid::new(100));
        assert_eq!(table.zone_of(Pid::new(100)), ZoneId::ROOT);
        // 未登记的 pid 同样视为根区域成员
        assert_eq!(table.zone_of(Pid::new(999)), ZoneId::ROOT);
    }

    #[test]
    fn test_membership_tracking() {
        let table = ProcessTable::new();
        table.register(Pid::new(1));
        table.register(Pid::new(2));

        assert!(!table.has_member(ZoneId::new(3)));
        table.set_zone(Pid::new(2), ZoneId::new(3));
        assert!(table.has_member(ZoneId::new(3)));
        assert_eq!(table.zone_of(Pid::new(2)), ZoneId::new(3));

        table.unregister(Pid::new(2));
        assert!(!table.has_member(ZoneId::new(3)));
    }
}
