use crate::{
    app_lib::AppError,
    features::{
        session::types::ApiResponse,
        verify::request::{TwoFactorForm, VerificationRequest, VerifyError},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Open,
    Submitting,
    /// Terminal: the page reloads.
    Succeeded,
    /// Terminal: the dialog is dismissed.
    Cancelled,
}

/// What the UI does after the login call answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Reload(String),
    Retry(String),
}

/// State of an open verification dialog. A closed dialog has no value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyDialog {
    request: VerificationRequest,
    phase: Phase,
    error: Option<String>,
}

impl VerifyDialog {
    pub fn open(request: VerificationRequest) -> Self {
        Self {
            request,
            phase: Phase::Open,
            error: None,
        }
    }

    pub fn request(&self) -> &VerificationRequest {
        &self.request
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Validates the code and marks the dialog in flight. Returns the body to
    /// post; no request may be sent when this fails.
    pub fn submit(&mut self, code: &str) -> Result<TwoFactorForm, VerifyError> {
        if self.phase != Phase::Open {
            return Err(VerifyError::NotOpen);
        }
        match self.request.form(code) {
            Ok(form) => {
                self.phase = Phase::Submitting;
                self.error = None;
                Ok(form)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Applies the login response. Failures reopen the dialog for a retry.
    pub fn resolve(&mut self, result: Result<ApiResponse, AppError>) -> Outcome {
        match result {
            Ok(response) if response.is_ok() => {
                self.phase = Phase::Succeeded;
                Outcome::Reload("Logged in successfully".to_string())
            }
            Ok(response) => self.fail(&response.msg),
            Err(err) => self.fail(&err.to_string()),
        }
    }

    pub fn cancel(&mut self) {
        if self.phase != Phase::Succeeded {
            self.phase = Phase::Cancelled;
        }
    }

    fn fail(&mut self, message: &str) -> Outcome {
        let message = format!("Failed to log in: {message}");
        self.phase = Phase::Open;
        self.error = Some(message.clone());
        Outcome::Retry(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::verify::request::{Channel, OrganizationRef};

    fn dialog() -> VerifyDialog {
        VerifyDialog::open(VerificationRequest {
            channel: Channel::Email,
            address: "a@b.com".to_string(),
            organization: OrganizationRef {
                owner: "admin".to_string(),
                name: "org1".to_string(),
            },
            user_id: "org1/alice".to_string(),
            cool_down_secs: 60,
        })
    }

    fn response(status: &str, msg: &str) -> ApiResponse {
        ApiResponse {
            status: status.to_string(),
            msg: msg.to_string(),
            data: None,
            data2: None,
        }
    }

    #[test]
    fn empty_code_stays_open_with_error() {
        let mut dialog = dialog();
        assert_eq!(dialog.submit(""), Err(VerifyError::EmptyCode));
        assert_eq!(dialog.phase(), Phase::Open);
        assert_eq!(dialog.error(), Some("Empty code"));
    }

    #[test]
    fn submit_marks_in_flight_and_blocks_double_submit() {
        let mut dialog = dialog();
        assert!(dialog.submit("123456").is_ok());
        assert!(dialog.is_submitting());
        assert_eq!(dialog.submit("123456"), Err(VerifyError::NotOpen));
    }

    #[test]
    fn ok_status_reloads() {
        let mut dialog = dialog();
        assert!(dialog.submit("123456").is_ok());
        assert_eq!(
            dialog.resolve(Ok(response("ok", ""))),
            Outcome::Reload("Logged in successfully".to_string())
        );
        assert_eq!(dialog.phase(), Phase::Succeeded);

        dialog.cancel();
        assert_eq!(dialog.phase(), Phase::Succeeded);
    }

    #[test]
    fn rejection_reopens_for_retry() {
        let mut dialog = dialog();
        assert!(dialog.submit("000000").is_ok());
        let outcome = dialog.resolve(Ok(response("error", "Code has not been sent yet!")));
        assert_eq!(
            outcome,
            Outcome::Retry("Failed to log in: Code has not been sent yet!".to_string())
        );
        assert_eq!(dialog.phase(), Phase::Open);
        assert!(!dialog.is_submitting());
        assert_eq!(
            dialog.error(),
            Some("Failed to log in: Code has not been sent yet!")
        );

        assert!(dialog.submit("123456").is_ok());
        assert_eq!(dialog.error(), None);
    }

    #[test]
    fn transport_error_is_handled_like_rejection() {
        let mut dialog = dialog();
        assert!(dialog.submit("123456").is_ok());
        let outcome = dialog.resolve(Err(AppError::Network("offline".to_string())));
        assert!(matches!(outcome, Outcome::Retry(message) if message.starts_with("Failed to log in: ")));
        assert_eq!(dialog.phase(), Phase::Open);
    }

    #[test]
    fn cancel_closes() {
        let mut dialog = dialog();
        dialog.cancel();
        assert_eq!(dialog.phase(), Phase::Cancelled);
        assert_eq!(dialog.submit("123456"), Err(VerifyError::NotOpen));
    }
}
