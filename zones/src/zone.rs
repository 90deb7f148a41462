use core::fmt;

use alloc::string::String;

/// 区域标识符
///
/// 存活记录持有的 id 恒为正数；`0` 保留给隐含的根区域，
/// `-1` 是仅在请求时出现的哨兵值，表示"调用者当前所在的区域"。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneId(i32);

impl ZoneId {
    /// 隐含的根区域，没有对应的记录
    pub const ROOT: ZoneId = ZoneId(0);
    /// 请求哨兵：解析为调用者当前所在的区域
    pub const CURRENT: ZoneId = ZoneId(-1);

    pub const fn new(id: i32) -> Self {
        return Self(id);
    }

    pub const fn data(&self) -> i32 {
        return self.0;
    }

    pub fn is_root(&self) -> bool {
        return self.0 == 0;
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 执行单元（进程）标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pid(usize);

impl Pid {
    pub const fn new(pid: usize) -> Self {
        return Self(pid);
    }

    pub const fn data(&self) -> usize {
        return self.0;
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 一条存活区域的记录
///
/// 不变量：在所有存活记录中，`id` 与 `name` 各自唯一；`id` 永不为 `0`。
/// 记录的 id 与名称在其生命周期内不可变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    id: ZoneId,
    name: String,
}

impl Zone {
    /// 区域名的最大字节长度
    pub const MAX_NAME_LEN: usize = 64;
    /// 根区域的可解析名称（根区域本身不占记录）
    pub const ROOT_NAME: &'static str = "global";

    pub fn new(id: ZoneId, name: String) -> Self {
        return Self { id, name };
    }

    pub fn id(&self) -> ZoneId {
        return self.id;
    }

    pub fn name(&self) -> &str {
        return &self.name;
    }
}

/// 检查区域名是否只含允许的字符集 `[A-Za-z0-9_-]`，且非空
pub fn name_charset_ok(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    return name
        .bytes()
        .all(|c| c.is_ascii_alphanumeric() || c == b'-' || c == b'_');
}
