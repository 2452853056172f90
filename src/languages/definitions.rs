use crate::models::language::LanguageDescriptor;

/// Returns the built-in language table in presentation order.
///
/// The order here is the order the language switcher shows entries in, so new
/// locales should be appended rather than sorted in.
pub fn builtin_languages() -> Vec<LanguageDescriptor> {
    vec![
        LanguageDescriptor::new(true, "English", "en"),
        LanguageDescriptor::new(false, "简体中文", "zh-Hans"),
        LanguageDescriptor::new(false, "繁體中文", "zh-Hant"),
    ]
}
