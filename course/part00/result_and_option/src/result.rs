/// Either a success value or an error value, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MyResult<T, E> {
    Ok(T),
    Error(E),
}

/*

 --------------------------
 | 0 - Ok    | T          |
 --------------------------
 | 1 - Error | E    |
 --------------------

*/

/// The failure payload handed back by [`get_result`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("{message}")]
pub struct MyError {
    pub message: String,
}

impl MyError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub const OUCH: &str = "Ouch!";

/// Returns `Ok(x)` for strictly positive inputs, otherwise an error saying `"Ouch!"`.
pub fn get_result(x: i32) -> MyResult<i32, MyError> {
    if x > 0 {
        return MyResult::Ok(x);
    }
    MyResult::Error(MyError::new(OUCH))
}

impl<T, E> MyResult<T, E> {
    /// Consumes the value and runs exactly one of `ok` or `error`.
    pub fn match_with<R>(self, ok: impl FnOnce(T) -> R, error: impl FnOnce(E) -> R) -> R {
        match self {
            MyResult::Ok(value) => ok(value),
            MyResult::Error(err) => error(err),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, MyResult::Ok(_))
    }

    pub fn is_error(&self) -> bool {
        !self.is_ok()
    }

    pub fn as_ref(&self) -> MyResult<&T, &E> {
        match self {
            MyResult::Ok(value) => MyResult::Ok(value),
            MyResult::Error(err) => MyResult::Error(err),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> MyResult<U, E> {
        match self {
            MyResult::Ok(value) => MyResult::Ok(f(value)),
            MyResult::Error(err) => MyResult::Error(err),
        }
    }

    pub fn map_error<F>(self, f: impl FnOnce(E) -> F) -> MyResult<T, F> {
        match self {
            MyResult::Ok(value) => MyResult::Ok(value),
            MyResult::Error(err) => MyResult::Error(f(err)),
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            MyResult::Ok(value) => Some(value),
            MyResult::Error(_) => None,
        }
    }

    pub fn error(self) -> Option<E> {
        match self {
            MyResult::Ok(_) => None,
            MyResult::Error(err) => Some(err),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            MyResult::Ok(value) => value,
            MyResult::Error(_) => default,
        }
    }
}

impl<T, E> From<Result<T, E>> for MyResult<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => MyResult::Ok(value),
            Err(err) => MyResult::Error(err),
        }
    }
}

impl<T, E> From<MyResult<T, E>> for Result<T, E> {
    fn from(value: MyResult<T, E>) -> Self {
        match value {
            MyResult::Ok(value) => Ok(value),
            MyResult::Error(err) => Err(err),
        }
    }
}
