use alloc::vec::Vec;

use crate::syscall::nr::SYS_ZONE_LOOKUP;
use crate::syscall::table::{FormattedSyscallParam, Syscall, SyscallHandle};
use crate::syscall::user_access::{check_and_clone_cstr, UserAddr};
use crate::syscall::SyscallContext;
use crate::zone::Zone;
use crate::ZoneError;

pub struct SysZoneLookup;

impl SysZoneLookup {
    fn name(args: &[usize]) -> UserAddr {
        UserAddr::new(args[0])
    }
}

impl Syscall for SysZoneLookup {
    fn num_args(&self) -> usize {
        1
    }

    fn handle(&self, args: &[usize], ctx: &mut SyscallContext<'_>) -> Result<usize, ZoneError> {
        let name_ptr = Self::name(args);

        // 空指针意味着"查询我自己的进程号"，永远成功
        if name_ptr.is_null() {
            return Ok(ctx.caller.pid().data());
        }

        let name = check_and_clone_cstr(ctx.mem, name_ptr, Zone::MAX_NAME_LEN + 1)?;
        let id = ctx.manager.lookup(&ctx.caller, &name)?;
        return Ok(id.data() as usize);
    }

    fn entry_format(&self, args: &[usize]) -> Vec<FormattedSyscallParam> {
        vec![FormattedSyscallParam::new(
            "name",
            format!("{:#x}", Self::name(args).data()),
        )]
    }
}

pub static SYS_ZONE_LOOKUP_HANDLE: SyscallHandle = SyscallHandle {
    nr: SYS_ZONE_LOOKUP,
    inner_handle: &SysZoneLookup,
    name: "sys_zone_lookup",
};
