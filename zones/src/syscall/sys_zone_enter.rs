use alloc::string::ToString;
use alloc::vec::Vec;

use crate::syscall::nr::SYS_ZONE_ENTER;
use crate::syscall::table::{FormattedSyscallParam, Syscall, SyscallHandle};
use crate::syscall::SyscallContext;
use crate::zone::ZoneId;
use crate::ZoneError;

pub struct SysZoneEnter;

impl SysZoneEnter {
    fn z(args: &[usize]) -> ZoneId {
        ZoneId::new(args[0] as i32)
    }
}

impl Syscall for SysZoneEnter {
    fn num_args(&self) -> usize {
        1
    }

    fn handle(&self, args: &[usize], ctx: &mut SyscallContext<'_>) -> Result<usize, ZoneError> {
        ctx.manager.enter(&ctx.caller, Self::z(args))?;
        return Ok(0);
    }

    fn entry_format(&self, args: &[usize]) -> Vec<FormattedSyscallParam> {
        vec![FormattedSyscallParam::new("z", Self::z(args).to_string())]
    }
}

pub static SYS_ZONE_ENTER_HANDLE: SyscallHandle = SyscallHandle {
    nr: SYS_ZONE_ENTER,
    inner_handle: &SysZoneEnter,
    name: "sys_zone_enter",
};
