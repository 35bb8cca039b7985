mod alert;
mod avatar;
mod button;
mod countdown_button;
mod spinner;
mod toasts;

pub(crate) use alert::Alert;
pub(crate) use avatar::Avatar;
pub(crate) use button::Button;
pub(crate) use countdown_button::{start_countdown, CountdownButton};
pub(crate) use spinner::Spinner;
pub(crate) use toasts::Toasts;
