use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fixed user-facing messages the cart can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notice {
    OutOfStock,
    AddFailed,
    RemoveFailed,
    UpdateFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::OutOfStock => "Quantidade solicitada fora de estoque",
            Notice::AddFailed => "Erro na adição do produto",
            Notice::RemoveFailed => "Erro na remoção do produto",
            Notice::UpdateFailed => "Erro na alteração de quantidade do produto",
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// An error-severity notice stamped with the time it was raised.
pub struct Notification {
    pub notice: Notice,
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    pub fn error(notice: Notice) -> Self {
        Self {
            notice,
            raised_at: Utc::now(),
        }
    }

    pub fn message(&self) -> &'static str {
        self.notice.message()
    }
}
