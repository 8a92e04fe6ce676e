/// A value that may or may not be present.
///
/// Mirrors `std::option::Option`, spelled out so the two cases are visible.
/// A `match` on it must name both variants or the compiler rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MyOption<T> {
    Some(T),
    None,
}

/*

 ----------------
 | 0 - Some | T |
 ----------------
 | 1 - None |
 ------------

*/

/// Returns `Some(x)` for strictly positive inputs and `None` otherwise.
pub fn get_some(x: i32) -> MyOption<i32> {
    if x > 0 {
        return MyOption::Some(x);
    }
    MyOption::None
}

impl<T> MyOption<T> {
    /// Consumes the value, running `some` with the inner value or `none` when empty.
    /// Exactly one of the two closures is called.
    pub fn match_with<R>(self, some: impl FnOnce(T) -> R, none: impl FnOnce() -> R) -> R {
        match self {
            MyOption::Some(value) => some(value),
            MyOption::None => none(),
        }
    }

    pub fn is_some(&self) -> bool {
        matches!(self, MyOption::Some(_))
    }

    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    pub fn as_ref(&self) -> MyOption<&T> {
        match self {
            MyOption::Some(value) => MyOption::Some(value),
            MyOption::None => MyOption::None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> MyOption<U> {
        match self {
            MyOption::Some(value) => MyOption::Some(f(value)),
            MyOption::None => MyOption::None,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            MyOption::Some(value) => value,
            MyOption::None => default,
        }
    }

    /// Turns an empty value into `Err(err)`.
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            MyOption::Some(value) => Ok(value),
            MyOption::None => Err(err),
        }
    }
}

impl<T> From<Option<T>> for MyOption<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => MyOption::Some(value),
            None => MyOption::None,
        }
    }
}

impl<T> From<MyOption<T>> for Option<T> {
    fn from(value: MyOption<T>) -> Self {
        match value {
            MyOption::Some(value) => Some(value),
            MyOption::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(3 => MyOption::Some(3); "3 is present")]
    #[test_case(1 => MyOption::Some(1); "smallest positive is present")]
    #[test_case(i32::MAX => MyOption::Some(i32::MAX); "max is present")]
    #[test_case(0 => MyOption::None; "0 is absent")]
    #[test_case(-7 => MyOption::None; "negatives are absent")]
    #[test_case(i32::MIN => MyOption::None; "min is absent")]
    fn get_some_threshold(x: i32) -> MyOption<i32> {
        get_some(x)
    }

    #[test_case(42)]
    #[test_case(1)]
    fn some_arm_sees_the_wrapped_value(x: i32) {
        match get_some(x) {
            MyOption::Some(r) => assert_eq!(x, r),
            MyOption::None => panic!("expected Some for {x}"),
        }
    }

    #[test_case(MyOption::Some("hello") => (1, 0); "some runs only the some arm")]
    #[test_case(MyOption::None => (0, 1); "none runs only the none arm")]
    fn match_with_runs_exactly_one_arm(opt: MyOption<&str>) -> (usize, usize) {
        let mut some_calls = 0;
        let mut none_calls = 0;
        opt.match_with(|_| some_calls += 1, || none_calls += 1);
        (some_calls, none_calls)
    }

    #[test]
    fn match_with_returns_arm_value() {
        let rendered = get_some(3).match_with(|r| format!("Some: {r}"), || "None".to_string());
        assert_eq!("Some: 3", rendered);

        let rendered = get_some(0).match_with(|r| format!("Some: {r}"), || "None".to_string());
        assert_eq!("None", rendered);
    }

    #[test]
    fn helpers() {
        let present = MyOption::Some(String::from("abc"));
        assert!(present.is_some());
        assert_eq!(MyOption::Some(&String::from("abc")), present.as_ref());
        assert_eq!(MyOption::Some(3), present.clone().map(|s| s.len()));
        assert_eq!("abc", present.unwrap_or(String::from("xyz")));

        let absent: MyOption<String> = MyOption::None;
        assert!(absent.is_none());
        assert_eq!(MyOption::None, absent.clone().map(|s| s.len()));
        assert_eq!(Err("missing"), absent.clone().ok_or("missing"));
        assert_eq!("xyz", absent.unwrap_or(String::from("xyz")));
    }

    #[test]
    fn std_conversions_are_lossless() {
        let full_string = "hello world";
        let found: MyOption<usize> = full_string.find("world").into();
        assert_eq!(MyOption::Some(6), found);

        let missing: MyOption<usize> = full_string.find("xyz").into();
        assert_eq!(MyOption::None, missing);

        assert_eq!(Some(6), Option::from(found));
        assert_eq!(None, Option::<usize>::from(missing));
    }
}
