use crate::StackError;

/// Выход из функции с ошибкой.
///
/// `bail!(err)` принимает любую ошибку с `ErrorExt`. Вариант с кодом
/// собирает `GenericError`, сообщение можно форматировать:
///
/// ```ignore
/// bail!(StoreError::CompanyNotFound { id });
/// bail!(StatusCode::InvalidValue, "radius {} is not finite", radius);
/// ```
#[macro_export]
macro_rules! bail {
    ($err:expr $(,)?) => {
        return ::core::result::Result::Err($crate::StackError::from($err))
    };
    ($code:expr, $($fmt:tt)+) => {
        return ::core::result::Result::Err($crate::StackError::new(
            $crate::types::GenericError::new($code, format!($($fmt)+)),
        ))
    };
}

/// `bail!`, если условие не выполнено. Аргументы после условия те же.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($rest:tt)+) => {
        if !($cond) {
            $crate::bail!($($rest)+);
        }
    };
}

/// Контекст для `Result`, ошибка которого сводится к [`StackError`].
pub trait ResultExt<T> {
    fn context(
        self,
        ctx: impl Into<String>,
    ) -> Result<T, StackError>;

    /// Строка контекста строится только при ошибке.
    fn with_context<C: Into<String>>(
        self,
        f: impl FnOnce() -> C,
    ) -> Result<T, StackError>;
}

impl<T, E: Into<StackError>> ResultExt<T> for Result<T, E> {
    #[track_caller]
    fn context(
        self,
        ctx: impl Into<String>,
    ) -> Result<T, StackError> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(e.into().context(ctx)),
        }
    }

    #[track_caller]
    fn with_context<C: Into<String>>(
        self,
        f: impl FnOnce() -> C,
    ) -> Result<T, StackError> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(e.into().context(f())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HubResult, StatusCode, StoreError, ValidationError};

    fn find_company(id: u64) -> HubResult<&'static str> {
        if id != 1 {
            bail!(StoreError::CompanyNotFound { id });
        }
        Ok("Root Company")
    }

    fn check_name(name: &str) -> HubResult<usize> {
        ensure!(!name.is_empty(), ValidationError::Missing { field: "name" });
        ensure!(name.is_ascii(), StatusCode::InvalidValue, "name is not ascii");
        ensure!(name.len() <= 64, StatusCode::InvalidValue, "name of {} bytes is too long", name.len());
        Ok(name.len())
    }

    #[test]
    fn test_bail_typed_error() {
        assert_eq!(find_company(1).unwrap(), "Root Company");

        let err = find_company(3).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NotFound);
        assert!(err.downcast_ref::<StoreError>().is_some());
    }

    #[test]
    fn test_ensure_forms() {
        assert_eq!(check_name("Volt Energy").unwrap(), 11);

        let missing = check_name("").unwrap_err();
        assert_eq!(missing.client_message(), "The name field is required");
        assert_eq!(missing.status_code(), StatusCode::InvalidArgs);

        let plain = check_name("Ёлка").unwrap_err();
        assert_eq!(plain.to_string(), "name is not ascii");

        let long = check_name(&"x".repeat(70)).unwrap_err();
        assert_eq!(long.to_string(), "name of 70 bytes is too long");
        assert_eq!(long.status_code(), StatusCode::InvalidValue);
    }

    #[test]
    fn test_context_points_at_caller() {
        let err = find_company(9).context("child-stations").unwrap_err();
        assert_eq!(err.contexts()[0].message, "child-stations");
        assert!(err.contexts()[0].location.file().ends_with("macros.rs"));
        assert_eq!(err.to_string(), "child-stations: Company not found: 9");
    }

    #[test]
    fn test_with_context_only_on_error() {
        let mut calls = 0;
        let ok = find_company(1).with_context(|| {
            calls += 1;
            "unused"
        });
        assert!(ok.is_ok());
        assert_eq!(calls, 0);

        let err = find_company(5)
            .with_context(|| format!("Loading children of company {}", 5))
            .unwrap_err();
        assert_eq!(err.contexts().len(), 1);
        assert_eq!(err.contexts()[0].message, "Loading children of company 5");
    }
}
