use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Display;

use crate::error::ZoneError;
use crate::syscall::SyscallContext;

/// 定义Syscall trait
pub trait Syscall: Send + Sync + 'static {
    /// 系统调用参数数量
    fn num_args(&self) -> usize;

    fn handle(&self, args: &[usize], ctx: &mut SyscallContext<'_>) -> Result<usize, ZoneError>;

    /// Formats the system call parameters for display/debug purposes
    fn entry_format(&self, args: &[usize]) -> Vec<FormattedSyscallParam>;
}

pub struct FormattedSyscallParam {
    pub name: &'static str,
    pub value: String,
}

impl FormattedSyscallParam {
    pub fn new(name: &'static str, value: String) -> Self {
        Self { name, value }
    }
}

impl Display for FormattedSyscallParam {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// 系统调用处理句柄
pub struct SyscallHandle {
    pub nr: usize,
    pub inner_handle: &'static dyn Syscall,
    pub name: &'static str,
}

impl SyscallHandle {
    #[inline(never)]
    pub fn args_string(&self, args: &[usize]) -> String {
        let args_slice = self.inner_handle.entry_format(args);
        args_slice
            .iter()
            .map(|p| format!("{}", p))
            .collect::<Vec<String>>()
            .join(", ")
    }

    /// 执行处理器并把结果折叠为 POSIX 约定
    ///
    /// 成功返回非负的 retval，失败返回负数错误码。
    pub fn invoke(&self, args: &[usize], ctx: &mut SyscallContext<'_>) -> isize {
        debug_assert!(args.len() >= self.inner_handle.num_args());
        log::debug!("{}({})", self.name, self.args_string(args));
        return match self.inner_handle.handle(args, ctx) {
            Ok(retval) => retval as isize,
            Err(e) => e.to_posix_errno() as isize,
        };
    }
}

/// 系统调用表类型
///
/// 稀疏表，按调用号索引；由宿主显式构造并持有，没有全局实例。
pub struct SyscallTable {
    entries: [Option<&'static SyscallHandle>; Self::ENTRIES],
}

impl SyscallTable {
    pub const ENTRIES: usize = 512;

    pub fn new() -> Self {
        return Self {
            entries: [None; Self::ENTRIES],
        };
    }

    /// 注册一个处理句柄；调用号越界或重复注册是组装期错误
    pub fn register(&mut self, handle: &'static SyscallHandle) {
        assert!(
            handle.nr < Self::ENTRIES,
            "Invalid syscall number: {}",
            handle.nr
        );
        assert!(
            self.entries[handle.nr].is_none(),
            "Duplicate syscall number: {}",
            handle.nr
        );
        self.entries[handle.nr] = Some(handle);
    }

    /// 获取系统调用处理函数
    pub fn get(&self, nr: usize) -> Option<&'static SyscallHandle> {
        *self.entries.get(nr)?
    }
}

impl Default for SyscallTable {
    fn default() -> Self {
        return Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syscall::{nr, zone_syscall_table};

    #[test]
    fn test_table_is_sparse_and_bounds_checked() {
        let table = zone_syscall_table();
        assert!(table.get(nr::SYS_ZONE_CREATE).is_some());
        assert!(table.get(nr::SYS_ZONE_LOOKUP).is_some());
        assert!(table.get(0).is_none());
        assert!(table.get(SyscallTable::ENTRIES).is_none());
        assert!(table.get(usize::MAX).is_none());
    }

    #[test]
    fn test_handle_names_match_numbers() {
        let table = zone_syscall_table();
        let handle = table.get(nr::SYS_ZONE_DESTROY).unwrap();
        assert_eq!(handle.nr, nr::SYS_ZONE_DESTROY);
        assert_eq!(handle.name, "sys_zone_destroy");
    }
}
