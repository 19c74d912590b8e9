use yew::prelude::*;

use crate::services::timing::run_after;

/// Show/hide state for an element that fades in through a `visible` class
pub struct UseDeferredRevealResult {
    /// Element is in the layout (`display: block`)
    pub shown: bool,
    /// `visible` class applied, set shortly after `shown`
    pub visible: bool,
    pub show: Callback<()>,
    pub hide: Callback<()>,
}

/// Hook for success messages and panels that animate in after being shown.
///
/// `show` puts the element in the layout immediately and flips `visible`
/// after `delay_ms`, so the CSS transition has a starting state to run from.
#[hook]
pub fn use_deferred_reveal(delay_ms: u32) -> UseDeferredRevealResult {
    let shown = use_state(|| false);
    let visible = use_state(|| false);

    let show = {
        let shown = shown.clone();
        let visible = visible.clone();
        Callback::from(move |_| {
            shown.set(true);
            let visible = visible.clone();
            run_after(delay_ms, move || visible.set(true));
        })
    };

    let hide = {
        let shown = shown.clone();
        let visible = visible.clone();
        Callback::from(move |_| {
            shown.set(false);
            visible.set(false);
        })
    };

    UseDeferredRevealResult {
        shown: *shown,
        visible: *visible,
        show,
        hide,
    }
}

/// Inline style and class list for a revealable element
pub fn reveal_attributes(base_class: &str, shown: bool, visible: bool) -> (String, Classes) {
    let style = if shown { "display: block;" } else { "display: none;" };
    let mut classes = classes!(base_class.to_string());
    if visible {
        classes.push("visible");
    }
    (style.to_string(), classes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_element() {
        let (style, classes) = reveal_attributes("form-message", false, false);
        assert_eq!(style, "display: none;");
        assert!(!classes.contains("visible"));
    }

    #[test]
    fn test_shown_before_reveal() {
        let (style, classes) = reveal_attributes("form-message", true, false);
        assert_eq!(style, "display: block;");
        assert!(classes.contains("form-message"));
        assert!(!classes.contains("visible"));
    }

    #[test]
    fn test_revealed_element() {
        let (_, classes) = reveal_attributes("results", true, true);
        assert!(classes.contains("visible"));
    }
}
