//! 跨调用者内存边界传输数据的辅助设施
//!
//! 注册表从不直接解引用调用者的地址；所有传输都经由 [`UserMemory`]
//! trait，传输失败统一表现为 `CopyFault`，与 `NotFound`/`InvalidName`
//! 严格区分。

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ZoneError;

/// 调用者地址空间中的一个地址
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UserAddr(usize);

impl UserAddr {
    pub const NULL: UserAddr = UserAddr(0);

    pub const fn new(addr: usize) -> Self {
        return Self(addr);
    }

    pub const fn data(&self) -> usize {
        return self.0;
    }

    pub fn is_null(&self) -> bool {
        return self.0 == 0;
    }

    pub fn add(self, offset: usize) -> Self {
        return Self(self.0 + offset);
    }
}

/// 调用者内存的访问通道
///
/// 由宿主环境实现；实现必须对每次访问做地址校验，非法地址返回
/// `CopyFault` 而不是阻塞或崩溃。
pub trait UserMemory {
    /// 从调用者内存拷贝数据进来
    fn copy_from_user(&self, dst: &mut [u8], src: UserAddr) -> Result<usize, ZoneError>;

    /// 把数据拷贝到调用者内存
    fn copy_to_user(&mut self, dst: UserAddr, src: &[u8]) -> Result<usize, ZoneError>;
}

/// 检查并从调用者内存拷贝一个 C 字符串
///
/// 一旦遇到非法地址，就会返回错误。
///
/// ## 参数
///
/// - `mem`：调用者内存的访问通道
/// - `user`：调用者内存中的 C 字符串地址
/// - `max_length`：最大扫描长度（含 NUL）
///
/// ## 错误
///
/// - `CopyFault`：地址不合法
/// - `NameTooLong`：在 `max_length` 字节内没有出现 NUL
/// - `InvalidName`：内容不是合法的 UTF-8
pub fn check_and_clone_cstr(
    mem: &dyn UserMemory,
    user: UserAddr,
    max_length: usize,
) -> Result<String, ZoneError> {
    let mut buffer = Vec::new();
    for i in 0..max_length {
        let mut c = [0u8; 1];
        mem.copy_from_user(&mut c, user.add(i))?;
        if c[0] == 0 {
            return String::from_utf8(buffer).map_err(|_| ZoneError::InvalidName);
        }
        buffer.push(c[0]);
    }
    // 界内没有 NUL
    return Err(ZoneError::NameTooLong);
}

/// 把一个字符串以 C 字符串的形式写入调用者内存
///
/// ## 错误
///
/// - `NameTooLong`：`buflen` 容不下字符串加终结 NUL
/// - `CopyFault`：目标地址不合法
pub fn copy_cstr_to_user(
    mem: &mut dyn UserMemory,
    dst: UserAddr,
    s: &str,
    buflen: usize,
) -> Result<usize, ZoneError> {
    if s.len() + 1 > buflen {
        return Err(ZoneError::NameTooLong);
    }
    mem.copy_to_user(dst, s.as_bytes())?;
    mem.copy_to_user(dst.add(s.len()), &[0u8])?;
    return Ok(s.len() + 1);
}

/// 平坦内存：调用者内存的参考实现
///
/// 一段线性分配的字节区域，映射在 [`FlatMemory::BASE`] 起始的地址上；
/// 空指针与越界地址都会触发 `CopyFault`。用于宿主侧测试与示范。
pub struct FlatMemory {
    bytes: Vec<u8>,
    next: usize,
}

impl FlatMemory {
    /// 映射基址，低于它的地址（含 NULL）全部非法
    pub const BASE: usize = 0x1000;

    pub fn new(size: usize) -> Self {
        return Self {
            bytes: vec![0; size],
            next: 0,
        };
    }

    /// 线性分配一段调用者内存，返回其地址
    pub fn alloc(&mut self, len: usize) -> UserAddr {
        assert!(self.next + len <= self.bytes.len(), "flat memory exhausted");
        let addr = UserAddr::new(Self::BASE + self.next);
        self.next += len;
        return addr;
    }

    /// 分配并写入一个 C 字符串，返回其地址
    pub fn alloc_cstr(&mut self, s: &str) -> UserAddr {
        let addr = self.alloc(s.len() + 1);
        let off = addr.data() - Self::BASE;
        self.bytes[off..off + s.len()].copy_from_slice(s.as_bytes());
        self.bytes[off + s.len()] = 0;
        return addr;
    }

    fn check_range(&self, addr: UserAddr, len: usize) -> Result<usize, ZoneError> {
        if addr.is_null() {
            return Err(ZoneError::CopyFault);
        }
        let start = addr
            .data()
            .checked_sub(Self::BASE)
            .ok_or(ZoneError::CopyFault)?;
        let end = start.checked_add(len).ok_or(ZoneError::CopyFault)?;
        if end > self.bytes.len() {
            return Err(ZoneError::CopyFault);
        }
        return Ok(start);
    }
}

impl UserMemory for FlatMemory {
    fn copy_from_user(&self, dst: &mut [u8], src: UserAddr) -> Result<usize, ZoneError> {
        let start = self.check_range(src, dst.len())?;
        dst.copy_from_slice(&self.bytes[start..start + dst.len()]);
        return Ok(dst.len());
    }

    fn copy_to_user(&mut self, dst: UserAddr, src: &[u8]) -> Result<usize, ZoneError> {
        let start = self.check_range(dst, src.len())?;
        self.bytes[start..start + src.len()].copy_from_slice(src);
        return Ok(src.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cstr_round_trip() {
        let mut mem = FlatMemory::new(128);
        let addr = mem.alloc_cstr("web-1");
        let s = check_and_clone_cstr(&mem, addr, 64).unwrap();
        assert_eq!(s, "web-1");
    }

    #[test]
    fn test_cstr_without_nul_in_bound() {
        let mut mem = FlatMemory::new(128);
        let addr = mem.alloc_cstr("abcdef");
        assert_eq!(
            check_and_clone_cstr(&mem, addr, 3),
            Err(ZoneError::NameTooLong)
        );
    }

    #[test]
    fn test_bad_addresses_fault() {
        let mut mem = FlatMemory::new(16);
        let mut buf = [0u8; 4];
        assert_eq!(
            mem.copy_from_user(&mut buf, UserAddr::NULL),
            Err(ZoneError::CopyFault)
        );
        assert_eq!(
            mem.copy_from_user(&mut buf, UserAddr::new(FlatMemory::BASE + 14)),
            Err(ZoneError::CopyFault)
        );
        assert_eq!(
            mem.copy_to_user(UserAddr::new(FlatMemory::BASE - 1), &buf),
            Err(ZoneError::CopyFault)
        );
        assert_eq!(
            check_and_clone_cstr(&mem, UserAddr::new(0x10), 8),
            Err(ZoneError::CopyFault)
        );
    }

    #[test]
    fn test_copy_cstr_to_user_bounds() {
        let mut mem = FlatMemory::new(64);
        let dst = mem.alloc(8);
        assert_eq!(
            copy_cstr_to_user(&mut mem, dst, "longer-than-8", 8),
            Err(ZoneError::NameTooLong)
        );
        assert_eq!(copy_cstr_to_user(&mut mem, dst, "ok", 8), Ok(3));
        assert_eq!(check_and_clone_cstr(&mem, dst, 8).unwrap(), "ok");
    }
}
