use thiserror::Error;

#[derive(Error, Debug)]
pub enum FocusError {
    #[error("Ошибка конфигурации: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Селектор не запустился или завершился с ошибкой
    #[error("Ошибка запуска селектора: {0}")]
    ProcessExecution(String),

    /// Непустой вывод селектора не является номером окна
    #[error("Вывод селектора не является номером окна: {output:?}")]
    Parse {
        output: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Оконный менеджер отклонил запрос
    #[error("Ошибка клиента оконного менеджера: {0}")]
    Client(String),

    #[error("Сервис недоступен: {0}")]
    ServiceUnavailable(String),

    #[error("Внутренняя ошибка: {0}")]
    Internal(String),
}

impl FocusError {
    /// Код завершения процесса для данной ошибки
    pub fn exit_code(&self) -> u8 {
        match self {
            FocusError::ProcessExecution(_) => 2,
            FocusError::Parse { .. } => 3,
            FocusError::Client(_) => 4,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, FocusError>;

// Удобные макросы для создания ошибок
#[macro_export]
macro_rules! focus_error {
    (process, $($arg:tt)*) => {
        $crate::error::FocusError::ProcessExecution(format!($($arg)*))
    };
    (client, $($arg:tt)*) => {
        $crate::error::FocusError::Client(format!($($arg)*))
    };
    (service_unavailable, $($arg:tt)*) => {
        $crate::error::FocusError::ServiceUnavailable(format!($($arg)*))
    };
    (internal, $($arg:tt)*) => {
        $crate::error::FocusError::Internal(format!($($arg)*))
    };
}
