use alloc::vec::Vec;
use core::mem::size_of;

use crate::syscall::nr::SYS_ZONE_LIST;
use crate::syscall::table::{FormattedSyscallParam, Syscall, SyscallHandle};
use crate::syscall::user_access::UserAddr;
use crate::syscall::SyscallContext;
use crate::ZoneError;

pub struct SysZoneList;

impl SysZoneList {
    fn zs(args: &[usize]) -> UserAddr {
        UserAddr::new(args[0])
    }

    fn nzs(args: &[usize]) -> UserAddr {
        UserAddr::new(args[1])
    }
}

impl Syscall for SysZoneList {
    fn num_args(&self) -> usize {
        2
    }

    fn handle(&self, args: &[usize], ctx: &mut SyscallContext<'_>) -> Result<usize, ZoneError> {
        let nzs = Self::nzs(args);

        // 容量握手：先读入调用者准备接收的数量
        let mut buf = [0u8; size_of::<usize>()];
        ctx.mem.copy_from_user(&mut buf, nzs)?;
        let capacity = usize::from_ne_bytes(buf);

        let ids = ctx.manager.list(&ctx.caller, capacity)?;

        let mut out: Vec<u8> = Vec::with_capacity(ids.len() * size_of::<i32>());
        for id in ids.iter() {
            out.extend_from_slice(&id.data().to_ne_bytes());
        }
        ctx.mem.copy_to_user(Self::zs(args), &out)?;
        // 实际数量写回同一个地址
        ctx.mem.copy_to_user(nzs, &ids.len().to_ne_bytes())?;
        return Ok(0);
    }

    fn entry_format(&self, args: &[usize]) -> Vec<FormattedSyscallParam> {
        vec![
            FormattedSyscallParam::new("zs", format!("{:#x}", Self::zs(args).data())),
            FormattedSyscallParam::new("nzs", format!("{:#x}", Self::nzs(args).data())),
        ]
    }
}

pub static SYS_ZONE_LIST_HANDLE: SyscallHandle = SyscallHandle {
    nr: SYS_ZONE_LIST,
    inner_handle: &SysZoneList,
    name: "sys_zone_list",
};
