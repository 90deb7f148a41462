use num_derive::{FromPrimitive, ToPrimitive};

/// 注册表操作的错误类型
///
/// 所有错误都是终态的、同步返回给直接调用者的；注册表内部不做重试。
/// 任何失败路径都不会留下部分可见的变更。
#[repr(i32)]
#[derive(Debug, FromPrimitive, ToPrimitive, Clone, Copy, PartialEq, Eq)]
pub enum ZoneError {
    /// 区域名（或输出缓冲区）超出长度上限 Zone name exceeds the length bound.
    NameTooLong = 1,
    /// 区域名为空或包含 `[A-Za-z0-9_-]` 之外的字符 Invalid characters in zone name.
    InvalidName = 2,
    /// 调用者不具备特权，或不在根区域内 Permission denied.
    PermissionDenied = 3,
    /// 已存在同名（或同 id）的存活区域 Zone already exists.
    AlreadyExists = 4,
    /// 存活区域数量已达上限 Too many zones are currently running.
    TooManyZones = 5,
    /// 指定的 id 或名称无法解析，或被可见性规则隐藏 No such zone.
    NotFound = 6,
    /// 目标区域内仍有存活的执行单元 Zone is still in use.
    Busy = 7,
    /// 调用者提供的容量小于结果数量 Caller-supplied capacity too small.
    BufferTooSmall = 8,
    /// 跨调用者内存边界的传输失败 Bad address.
    CopyFault = 9,
}

impl ZoneError {
    /// 把错误枚举转换为负数posix错误码。
    ///
    /// `TooManyZones` 与 `BufferTooSmall` 在进程内是两种错误，
    /// 但在系统调用边界上都表现为 `-ERANGE`。
    pub fn to_posix_errno(&self) -> i32 {
        match self {
            ZoneError::NameTooLong => -36,      // ENAMETOOLONG
            ZoneError::InvalidName => -22,      // EINVAL
            ZoneError::PermissionDenied => -1,  // EPERM
            ZoneError::AlreadyExists => -17,    // EEXIST
            ZoneError::TooManyZones => -34,     // ERANGE
            ZoneError::NotFound => -3,          // ESRCH
            ZoneError::Busy => -16,             // EBUSY
            ZoneError::BufferTooSmall => -34,   // ERANGE
            ZoneError::CopyFault => -14,        // EFAULT
        }
    }
}
