#![no_std]
#![allow(clippy::needless_return)]

#[cfg(test)]
#[macro_use]
extern crate std;

/// 在一组已分配的 id 中寻找最小的未使用正整数。
///
/// 扫描以隐含的根 id `0` 为锚点：把输入升序排序后，逐对检查相邻元素，
/// 在第一个差值不为 1 的位置返回 `prev + 1`；若整段连续，返回最大值加 1。
/// 非正数与重复项会被跳过。
///
/// ## 参数
///
/// - `ids`：当前已分配的 id 快照，会被原地排序
///
/// ## 返回值
///
/// 最小的未使用正整数。空输入返回 `1`。
pub fn lowest_free(ids: &mut [i32]) -> i32 {
    ids.sort_unstable();

    let mut prev = 0;
    for &id in ids.iter() {
        if id <= prev {
            // 非正数或重复项
            continue;
        }
        if id - prev != 1 {
            return prev + 1;
        }
        prev = id;
    }
    return prev + 1;
}
