//! 系统调用边界层
//!
//! 原始参数以 `usize` 数组的形式到达，每个操作一个处理器对象，
//! 负责跨调用者内存边界封送字符串与缓冲区，再调用生命周期层。
//! 返回值折叠为 POSIX 约定：非负的 retval，或负数错误码。

pub mod table;
pub mod user_access;

mod sys_zone_create;
mod sys_zone_destroy;
mod sys_zone_enter;
mod sys_zone_list;
mod sys_zone_lookup;
mod sys_zone_name;

pub use sys_zone_create::SYS_ZONE_CREATE_HANDLE;
pub use sys_zone_destroy::SYS_ZONE_DESTROY_HANDLE;
pub use sys_zone_enter::SYS_ZONE_ENTER_HANDLE;
pub use sys_zone_list::SYS_ZONE_LIST_HANDLE;
pub use sys_zone_lookup::SYS_ZONE_LOOKUP_HANDLE;
pub use sys_zone_name::SYS_ZONE_NAME_HANDLE;

use crate::cred::CallerContext;
use crate::manager::ZoneManager;
use crate::syscall::table::SyscallTable;
use crate::syscall::user_access::UserMemory;

/// 区域系统调用号
pub mod nr {
    pub const SYS_ZONE_CREATE: usize = 330;
    pub const SYS_ZONE_DESTROY: usize = 331;
    pub const SYS_ZONE_ENTER: usize = 332;
    pub const SYS_ZONE_LIST: usize = 333;
    pub const SYS_ZONE_NAME: usize = 334;
    pub const SYS_ZONE_LOOKUP: usize = 335;
}

/// 单次系统调用的执行上下文
///
/// 由宿主环境组装：注册表、已鉴权的调用者上下文、调用者内存的访问通道。
pub struct SyscallContext<'a> {
    pub manager: &'a ZoneManager,
    pub caller: CallerContext,
    pub mem: &'a mut dyn UserMemory,
}

/// 构造区域系统调用表
///
/// 显式注册全部六个处理器；表本身是普通对象，由宿主持有。
pub fn zone_syscall_table() -> SyscallTable {
    let mut table = SyscallTable::new();
    table.register(&SYS_ZONE_CREATE_HANDLE);
    table.register(&SYS_ZONE_DESTROY_HANDLE);
    table.register(&SYS_ZONE_ENTER_HANDLE);
    table.register(&SYS_ZONE_LIST_HANDLE);
    table.register(&SYS_ZONE_NAME_HANDLE);
    table.register(&SYS_ZONE_LOOKUP_HANDLE);
    return table;
}
