use crate::process::ProcessRoster;
use crate::zone::{Pid, ZoneId};

/// 每次调用携带的调用者上下文
///
/// 由调度层在进入注册表之前构造，注册表只读取、从不保存它。
/// `privileged` 是宿主环境特权原语的求值结果（例如 root 判定），
/// 注册表不关心它是如何得出的。
#[derive(Debug, Clone, Copy)]
pub struct CallerContext {
    pid: Pid,
    zone: ZoneId,
    privileged: bool,
}

impl CallerContext {
    pub fn new(pid: Pid, zone: ZoneId, privileged: bool) -> Self {
        return Self {
            pid,
            zone,
            privileged,
        };
    }

    /// 从进程表捕获调用者当前的成员关系
    pub fn from_roster(roster: &dyn ProcessRoster, pid: Pid, privileged: bool) -> Self {
        return Self::new(pid, roster.zone_of(pid), privileged);
    }

    pub fn pid(&self) -> Pid {
        return self.pid;
    }

    pub fn zone(&self) -> ZoneId {
        return self.zone;
    }

    pub fn privileged(&self) -> bool {
        return self.privileged;
    }

    /// 调用者是否可以变更注册表
    ///
    /// 两个独立条件必须同时成立：持有特权，且自身在根区域内。
    /// 对外二者的失败不作区分，统一表现为 `PermissionDenied`。
    pub fn can_admin_zones(&self) -> bool {
        return self.privileged && self.zone.is_root();
    }

    /// 调用者是否可以看到指定区域
    ///
    /// 根区域内的调用者看到一切；非根调用者只能看到自己所在的区域。
    pub fn can_see(&self, id: ZoneId) -> bool {
        return self.zone.is_root() || id == self.zone;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_requires_both_predicates() {
        let root_priv = CallerContext::new(Pid::new(1), ZoneId::ROOT, true);
        let root_unpriv = CallerContext::new(Pid::new(2), ZoneId::ROOT, false);
        let inner_priv = CallerContext::new(Pid::new(3), ZoneId::new(4), true);

        assert!(root_priv.can_admin_zones());
        assert!(!root_unpriv.can_admin_zones());
        assert!(!inner_priv.can_admin_zones());
    }

    #[test]
    fn test_visibility_asymmetry() {
        let root = CallerContext::new(Pid::new(1), ZoneId::ROOT, false);
        let inner = CallerContext::new(Pid::new(2), ZoneId::new(3), false);

        assert!(root.can_see(ZoneId::new(7)));
        assert!(inner.can_see(ZoneId::new(3)));
        assert!(!inner.can_see(ZoneId::new(7)));
        assert!(!inner.can_see(ZoneId::ROOT));
    }
}
