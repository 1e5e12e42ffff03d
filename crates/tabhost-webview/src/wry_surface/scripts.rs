//! Page scripts injected into content tabs for media teardown.

/// Injected at document start: records every `AudioContext` the page
/// creates so teardown can close them.
pub(super) const AUDIO_TRACKING_SCRIPT: &str = r#"
(function() {
    var Original = window.AudioContext || window.webkitAudioContext;
    if (!Original || window.__tabhostAudio) { return; }
    var contexts = [];
    Object.defineProperty(window, '__tabhostAudio', { value: contexts });
    function Tracked() {
        var ctx = new (Function.prototype.bind.apply(Original, [null].concat([].slice.call(arguments))))();
        contexts.push(ctx);
        return ctx;
    }
    Tracked.prototype = Original.prototype;
    window.AudioContext = Tracked;
    if (window.webkitAudioContext) { window.webkitAudioContext = Tracked; }
})();
"#;

/// Pause and unload every media element, close tracked audio contexts.
pub(super) const STOP_MEDIA_SCRIPT: &str = r#"
(function() {
    document.querySelectorAll('video, audio').forEach(function(el) {
        try { el.pause(); el.removeAttribute('src'); el.load(); } catch (e) {}
    });
    (window.__tabhostAudio || []).forEach(function(ctx) {
        try { ctx.close(); } catch (e) {}
    });
})();
"#;

pub(super) fn set_muted_script(muted: bool) -> String {
    format!(
        "document.querySelectorAll('video, audio').forEach(function(el) {{ el.muted = {muted}; }});\
         (window.__tabhostAudio || []).forEach(function(ctx) {{ try {{ ctx.{}(); }} catch (e) {{}} }});",
        if muted { "suspend" } else { "resume" }
    )
}
