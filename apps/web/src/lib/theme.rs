//! Shared Tailwind class constants to keep the console chrome and the
//! placeholder pages visually consistent.

pub struct Theme;

impl Theme {
    /// Centered card used by door pages (login, signup, forget).
    pub const DOOR_CARD: &'static str = "w-full max-w-md rounded-2xl border border-slate-200 bg-white/90 p-6 shadow-[0_20px_60px_-40px_rgba(15,23,42,0.35)] backdrop-blur sm:p-8";

    /// Standard text input.
    pub const INPUT: &'static str = "w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200";

    /// Read-only input, used for masked destinations.
    pub const INPUT_DISABLED: &'static str = "w-full rounded-xl border border-slate-200 bg-slate-100 px-3 py-2.5 text-sm text-slate-500 cursor-not-allowed";

    /// Field label above an input.
    pub const LABEL: &'static str = "block mb-2 text-sm font-medium text-slate-700";

    /// Secondary action rendered as an outlined button.
    pub const BUTTON_SECONDARY: &'static str = "inline-flex justify-center items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 hover:text-blue-700 dark:bg-gray-800 dark:text-gray-400 dark:border-gray-600 dark:hover:text-white dark:hover:bg-gray-700 transition-all";

    /// Text link.
    pub const LINK: &'static str = "text-sm font-medium text-slate-600 underline decoration-slate-300 underline-offset-4 transition hover:text-slate-900 cursor-pointer";
}
