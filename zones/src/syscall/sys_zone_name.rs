use alloc::string::ToString;
use alloc::vec::Vec;

use crate::syscall::nr::SYS_ZONE_NAME;
use crate::syscall::table::{FormattedSyscallParam, Syscall, SyscallHandle};
use crate::syscall::user_access::{copy_cstr_to_user, UserAddr};
use crate::syscall::SyscallContext;
use crate::zone::ZoneId;
use crate::ZoneError;

pub struct SysZoneName;

impl SysZoneName {
    fn z(args: &[usize]) -> ZoneId {
        ZoneId::new(args[0] as i32)
    }

    fn name(args: &[usize]) -> UserAddr {
        UserAddr::new(args[1])
    }

    fn namelen(args: &[usize]) -> usize {
        args[2]
    }
}

impl Syscall for SysZoneName {
    fn num_args(&self) -> usize {
        3
    }

    fn handle(&self, args: &[usize], ctx: &mut SyscallContext<'_>) -> Result<usize, ZoneError> {
        let name = ctx.manager.name_of(&ctx.caller, Self::z(args))?;
        copy_cstr_to_user(ctx.mem, Self::name(args), &name, Self::namelen(args))?;
        return Ok(0);
    }

    fn entry_format(&self, args: &[usize]) -> Vec<FormattedSyscallParam> {
        vec![
            FormattedSyscallParam::new("z", Self::z(args).to_string()),
            FormattedSyscallParam::new("name", format!("{:#x}", Self::name(args).data())),
            FormattedSyscallParam::new("namelen", Self::namelen(args).to_string()),
        ]
    }
}

pub static SYS_ZONE_NAME_HANDLE: SyscallHandle = SyscallHandle {
    nr: SYS_ZONE_NAME,
    inner_handle: &SysZoneName,
    name: "sys_zone_name",
};
