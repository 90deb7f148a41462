use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::cred::CallerContext;
use crate::error::ZoneError;
use crate::process::ProcessRoster;
use crate::registry::ZoneTable;
use crate::zone::{self, Zone, ZoneId};

/// 区域生命周期管理器
///
/// 组合存储、id 分配器与权限/可见性模型，对外提供六个同步的
/// 一次性操作。由组装调度层的一方显式构造并持有，没有全局实例。
///
/// 一个区域只有两种状态：**absent**（无记录）与 **live**（有记录），
/// 不存在挂起或排空中的中间态。
pub struct ZoneManager {
    table: ZoneTable,
    roster: Arc<dyn ProcessRoster>,
    max_zones: usize,
}

impl ZoneManager {
    /// 默认的存活区域数量上限
    pub const DEFAULT_MAX_ZONES: usize = 256;

    pub fn new(roster: Arc<dyn ProcessRoster>) -> Self {
        return Self::with_max_zones(roster, Self::DEFAULT_MAX_ZONES);
    }

    pub fn with_max_zones(roster: Arc<dyn ProcessRoster>, max_zones: usize) -> Self {
        return Self {
            table: ZoneTable::new(),
            roster,
            max_zones,
        };
    }

    pub fn table(&self) -> &ZoneTable {
        return &self.table;
    }

    /// 创建一个新区域，返回分配到的 id
    ///
    /// 校验顺序是规范性的，逐项短路：长度、字符集、权限、重名、容量。
    /// 每一项对应一个外部可观察的错误码，顺序不可交换。
    pub fn create(&self, ctx: &CallerContext, name: &str) -> Result<ZoneId, ZoneError> {
        if name.len() > Zone::MAX_NAME_LEN {
            return Err(ZoneError::NameTooLong);
        }
        if !zone::name_charset_ok(name) {
            return Err(ZoneError::InvalidName);
        }
        if !ctx.can_admin_zones() {
            return Err(ZoneError::PermissionDenied);
        }

        // 重名检查、容量检查、id 分配与插入在同一把排他锁下完成，
        // 并发的 create 无法在分配与提交之间插入同名或同 id 的记录
        let mut guard = self.table.write();
        if guard.find_by_name(name).is_some() {
            return Err(ZoneError::AlreadyExists);
        }
        if guard.len() >= self.max_zones {
            return Err(ZoneError::TooManyZones);
        }

        let mut ids: Vec<i32> = guard.snapshot_ids().iter().map(|id| id.data()).collect();
        let zid = ZoneId::new(minid::lowest_free(&mut ids));
        debug_assert!(guard.find_by_id(zid).is_none());
        guard.insert(Zone::new(zid, String::from(name)))?;
        drop(guard);

        log::info!("zone created: {} {}", name, zid);
        return Ok(zid);
    }

    /// 销毁一个区域
    ///
    /// 目标区域内仍有存活执行单元时拒绝销毁。忙检查在排他锁下查询
    /// 进程表（锁序恒为 注册表 -> 进程表）。
    pub fn destroy(&self, ctx: &CallerContext, id: ZoneId) -> Result<(), ZoneError> {
        if !ctx.can_admin_zones() {
            return Err(ZoneError::PermissionDenied);
        }

        let mut guard = self.table.write();
        let target = match guard.find_by_id(id) {
            Some(zone) => zone.clone(),
            None => return Err(ZoneError::NotFound),
        };
        if self.roster.has_member(id) {
            return Err(ZoneError::Busy);
        }
        guard.remove(id);
        drop(guard);

        log::info!("zone destroyed: {} {}", target.name(), target.id());
        return Ok(());
    }

    /// 使调用者进入指定区域
    ///
    /// 变更的是进程表里调用者自己的成员关系，注册表本身不变。
    /// 成员关系在共享锁内提交，并发的 destroy 要么在本次 enter 之前
    /// 完成（此处返回 `NotFound`），要么其忙检查必然观察到新成员。
    pub fn enter(&self, ctx: &CallerContext, id: ZoneId) -> Result<(), ZoneError> {
        if !ctx.can_admin_zones() {
            return Err(ZoneError::PermissionDenied);
        }

        let guard = self.table.read();
        if guard.find_by_id(id).is_none() {
            return Err(ZoneError::NotFound);
        }
        self.roster.set_zone(ctx.pid(), id);
        drop(guard);

        log::info!("pid {} entered zone {}", ctx.pid(), id);
        return Ok(());
    }

    /// 枚举调用者可见的区域 id
    ///
    /// 根区域内的调用者得到隐含的 `0` 加上全部存活 id（按插入顺序）；
    /// 非根调用者恰好得到其自身所在区域的 id。
    /// `capacity` 是调用者准备接收的数量上限。
    pub fn list(&self, ctx: &CallerContext, capacity: usize) -> Result<Vec<ZoneId>, ZoneError> {
        let ids = if ctx.zone().is_root() {
            let mut ids = vec![ZoneId::ROOT];
            ids.extend(self.table.snapshot_ids());
            ids
        } else {
            vec![ctx.zone()]
        };

        if capacity < ids.len() {
            return Err(ZoneError::BufferTooSmall);
        }
        return Ok(ids);
    }

    /// 解析区域 id 对应的名称
    ///
    /// `ZoneId::CURRENT`（-1）解析为调用者当前所在的区域；根区域对所有
    /// 调用者解析为 `"global"`，二者都不触及存储。非根调用者只能解析
    /// 自己所在区域的 id，其余一律 `NotFound`，即使记录存在。
    pub fn name_of(&self, ctx: &CallerContext, id: ZoneId) -> Result<String, ZoneError> {
        let id = if id == ZoneId::CURRENT { ctx.zone() } else { id };
        if id.is_root() {
            return Ok(String::from(Zone::ROOT_NAME));
        }
        if !ctx.can_see(id) {
            return Err(ZoneError::NotFound);
        }
        return match self.table.find_by_id(id) {
            Some(zone) => Ok(String::from(zone.name())),
            None => Err(ZoneError::NotFound),
        };
    }

    /// 解析区域名称对应的 id
    ///
    /// 与 `name_of` 遵循同一条非根可见性规则。根区域没有记录，
    /// 因此 `"global"` 在这里解析不到。
    pub fn lookup(&self, ctx: &CallerContext, name: &str) -> Result<ZoneId, ZoneError> {
        if name.len() > Zone::MAX_NAME_LEN {
            return Err(ZoneError::NameTooLong);
        }
        let zone = self.table.find_by_name(name).ok_or(ZoneError::NotFound)?;
        if !ctx.can_see(zone.id()) {
            return Err(ZoneError::NotFound);
        }
        return Ok(zone.id());
    }
}
