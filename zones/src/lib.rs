//! 区域（zone）身份与生命周期注册表。
//!
//! 一个区域是一个具名的、带唯一正整数 id 的逻辑命名空间，执行单元（进程）
//! 可以加入其中。本 crate 只负责身份管理与成员关系的可见性：
//!
//! - [`registry::ZoneTable`]：读写锁保护的记录存储
//! - [`manager::ZoneManager`]：create / destroy / enter / list / name_of / lookup
//! - [`cred::CallerContext`]：每次调用携带的权限与可见性上下文
//! - [`process::ProcessRoster`]：外部进程表的成员关系接缝
//! - [`syscall`]：按系统调用约定封送参数的边界层
//!
//! 隐含的根区域 id 恒为 `0`，名为 `"global"`，不占用任何记录；
//! 资源隔离本身由宿主环境实现，不属于本 crate 的职责。
#![no_std]
#![allow(clippy::needless_return)]

#[macro_use]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod cred;
pub mod error;
pub mod manager;
pub mod process;
pub mod registry;
pub mod syscall;
pub mod zone;

pub use cred::CallerContext;
pub use error::ZoneError;
pub use manager::ZoneManager;
pub use process::{ProcessRoster, ProcessTable};
pub use zone::{Pid, Zone, ZoneId};
