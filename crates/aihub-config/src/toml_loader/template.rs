//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# AI Hub Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[shell]
# native_windows = true   # false: open every external service in the system browser
# devtools = false
# user_agent = "AIHub/0.1"

[window]
# title = "AI Hub"
# width = 1400
# height = 900
# min_width = 800
# min_height = 600

[service_window]
# width = 1200
# height = 800
# min_width = 800
# min_height = 600

[layout]
# mode = "double"        # single, double, triple, quad
# active = ["kimi", "chatgpt-web"]
# slots = ["kimi", "chatgpt-web"]
# sidebar_collapsed = false

[zoom]
# step = 0.1             # 0.01-1.5; zoom is always clamped to 50%-200%

[logging]
# level = "info"         # debug, info, warn, error

# Replace the built-in service catalog. The first entry is the fallback
# service shown in empty slots.
#
# [[services]]
# id = "kimi"
# name = "Kimi"
# url = "https://www.kimi.com/"
# description = "Assistant"
# embeddable = true
# forces_external_window = false
"##
    .to_string()
}
