use alloc::vec::Vec;

use crate::syscall::nr::SYS_ZONE_CREATE;
use crate::syscall::table::{FormattedSyscallParam, Syscall, SyscallHandle};
use crate::syscall::user_access::{check_and_clone_cstr, UserAddr};
use crate::syscall::SyscallContext;
use crate::zone::Zone;
use crate::ZoneError;

pub struct SysZoneCreate;

impl SysZoneCreate {
    fn zonename(args: &[usize]) -> UserAddr {
        UserAddr::new(args[0])
    }
}

impl Syscall for SysZoneCreate {
    fn num_args(&self) -> usize {
        1
    }

    fn handle(&self, args: &[usize], ctx: &mut SyscallContext<'_>) -> Result<usize, ZoneError> {
        // 限定最大长度读取：界内无 NUL 即 ENAMETOOLONG，与生命周期层的
        // 长度检查对外呈现同一个错误码
        let name = check_and_clone_cstr(ctx.mem, Self::zonename(args), Zone::MAX_NAME_LEN + 1)?;
        let id = ctx.manager.create(&ctx.caller, &name)?;
        return Ok(id.data() as usize);
    }

    fn entry_format(&self, args: &[usize]) -> Vec<FormattedSyscallParam> {
        vec![FormattedSyscallParam::new(
            "zonename",
            format!("{:#x}", Self::zonename(args).data()),
        )]
    }
}

pub static SYS_ZONE_CREATE_HANDLE: SyscallHandle = SyscallHandle {
    nr: SYS_ZONE_CREATE,
    inner_handle: &SysZoneCreate,
    name: "sys_zone_create",
};
