use crate::utils::error::Result;

/// 回傳 true/false，輸入不合法時也不會回傳錯誤
pub trait Predicate<T: ?Sized>: Send + Sync {
    fn test(&self, input: &T) -> bool;
}

/// 輸入不合法時回傳錯誤的運算
pub trait FallibleOperation<I>: Send + Sync {
    type Output;

    fn apply(&self, input: I) -> Result<Self::Output>;
}
