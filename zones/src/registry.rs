use alloc::vec::Vec;

use spin::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::ZoneError;
use crate::zone::{Zone, ZoneId};

/// 注册表存储：读写锁保护的存活区域记录集合
///
/// 记录按插入顺序保存；顺序只保证迭代的确定性，没有别的语义。
/// 公开方法各自完成内部同步：查找走共享锁，变更走排他锁，
/// 任何方法都不允许在持有另一个方法的锁时被调用（不可重入）。
pub struct ZoneTable {
    inner: RwLock<InnerZoneTable>,
}

pub(crate) struct InnerZoneTable {
    zones: Vec<Zone>,
}

impl InnerZoneTable {
    pub(crate) fn find_by_name(&self, name: &str) -> Option<&Zone> {
        return self.zones.iter().find(|z| z.name() == name);
    }

    pub(crate) fn find_by_id(&self, id: ZoneId) -> Option<&Zone> {
        return self.zones.iter().find(|z| z.id() == id);
    }

    pub(crate) fn snapshot_ids(&self) -> Vec<ZoneId> {
        return self.zones.iter().map(|z| z.id()).collect();
    }

    pub(crate) fn len(&self) -> usize {
        return self.zones.len();
    }

    /// 插入一条记录，提交前在排他锁下复验 id 与名称的唯一性
    pub(crate) fn insert(&mut self, zone: Zone) -> Result<(), ZoneError> {
        if self.find_by_id(zone.id()).is_some() || self.find_by_name(zone.name()).is_some() {
            return Err(ZoneError::AlreadyExists);
        }
        self.zones.push(zone);
        return Ok(());
    }

    pub(crate) fn remove(&mut self, id: ZoneId) -> Option<Zone> {
        let pos = self.zones.iter().position(|z| z.id() == id)?;
        return Some(self.zones.remove(pos));
    }
}

impl ZoneTable {
    pub fn new() -> Self {
        return Self {
            inner: RwLock::new(InnerZoneTable { zones: Vec::new() }),
        };
    }

    pub fn find_by_name(&self, name: &str) -> Option<Zone> {
        return self.inner.read().find_by_name(name).cloned();
    }

    pub fn find_by_id(&self, id: ZoneId) -> Option<Zone> {
        return self.inner.read().find_by_id(id).cloned();
    }

    pub fn insert(&self, zone: Zone) -> Result<(), ZoneError> {
        return self.inner.write().insert(zone);
    }

    pub fn remove(&self, id: ZoneId) -> Option<Zone> {
        return self.inner.write().remove(id);
    }

    /// 按插入顺序返回所有存活 id 的快照
    pub fn snapshot_ids(&self) -> Vec<ZoneId> {
        return self.inner.read().snapshot_ids();
    }

    pub fn live_count(&self) -> usize {
        return self.inner.read().len();
    }

    /// 供生命周期层使用的共享锁视图，使复合读操作在一次加锁内完成
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, InnerZoneTable> {
        return self.inner.read();
    }

    /// 供生命周期层使用的排他锁视图，使 校验+分配+插入 / 查找+忙检查+移除
    /// 这样的复合变更在一次加锁内完成
    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, InnerZoneTable> {
        return self.inner.write();
    }
}

impl Default for ZoneTable {
    fn default() -> Self {
        return Self::new();
    }
}
