/// Plain builtin functions.
///
/// `print` and `add`: they receive evaluated arguments and return a value.
pub mod builtin;
/// The builtin dispatch table and the call and block-form evaluation that
/// uses it.
pub mod core;
/// Special forms.
///
/// `if`, `if/else` and `while` receive their head and blocks unevaluated and
/// decide themselves what runs, and how often.
pub mod special_form;
