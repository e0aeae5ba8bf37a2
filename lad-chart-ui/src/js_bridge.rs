//! ECharts interop via `js_sys::eval()`.
//!
//! `assets/js/echarts-bridge.js` is embedded at compile time and evaluated at
//! global scope once `echarts` has loaded. Options are handed over by
//! writing them to `window.__ladOptions[containerId]` and then calling the
//! bridge function for that container.

use lad_charts::{echarts, ChartSpec};
use lad_dashboard::{ChartHandle, ChartRenderer, RenderError};

static ECHARTS_BRIDGE_JS: &str = include_str!("../assets/js/echarts-bridge.js");

/// Evaluate `code`, turning a thrown JS exception into an error.
fn eval(code: &str) -> anyhow::Result<()> {
    js_sys::eval(code)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("JS error: {:?}", e))
}

/// Execute JS, wrapping in try/catch so failures only reach the console.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('[LAD] JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Add the ECharts `<script>` tag unless the library is already present.
pub fn load_echarts(url: &str) {
    let src = serde_json::to_string(url).unwrap_or_default();
    call_js(&format!(
        r#"
        if (typeof echarts === 'undefined' && !document.getElementById('lad-echarts')) {{
            var script = document.createElement('script');
            script.id = 'lad-echarts';
            script.src = {src};
            script.onerror = function() {{ console.error('[LAD] failed to load ECharts from', {src}); }};
            document.head.appendChild(script);
        }}
        "#,
    ));
}

/// Load the bridge once `echarts` is available. Call once at app startup.
///
/// The bridge is stored on `window` and evaluated with an indirect `eval`
/// from inside the polling callback, so its function declarations land at
/// global scope.
pub fn init_charts() {
    let store_js = format!(
        "window.__ladBridgeScript = {}; window.__ladOptions = window.__ladOptions || {{}};",
        serde_json::to_string(ECHARTS_BRIDGE_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__ladChartsReady || window.__ladChartsPolling) return;
            window.__ladChartsPolling = true;
            var waitForECharts = setInterval(function() {
                if (typeof echarts !== 'undefined') {
                    clearInterval(waitForECharts);
                    (0, eval)(window.__ladBridgeScript);
                    delete window.__ladBridgeScript;
                    if (typeof ladMountChart !== 'undefined') window.ladMountChart = ladMountChart;
                    if (typeof ladUpdateChart !== 'undefined') window.ladUpdateChart = ladUpdateChart;
                    if (typeof ladDisposeChart !== 'undefined') window.ladDisposeChart = ladDisposeChart;
                    window.__ladChartsReady = true;
                    console.log('[LAD] charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// JS statement storing `spec` as the pending option of `container_id`.
fn store_option_js(container_id: &str, spec: &ChartSpec) -> anyhow::Result<String> {
    let option = serde_json::to_string(&echarts::to_option(spec))?;
    let id = serde_json::to_string(container_id)?;
    Ok(format!(
        "window.__ladOptions = window.__ladOptions || {{}}; window.__ladOptions[{id}] = {option};"
    ))
}

/// JS statement cancelling the pending mount poll of `id`, if any.
fn cancel_poll_js(id: &str) -> String {
    format!(
        "if (window.__ladPolls && window.__ladPolls[{id}] !== undefined) {{ \
         clearInterval(window.__ladPolls[{id}]); delete window.__ladPolls[{id}]; }}"
    )
}

/// Mount a chart in `container_id`.
///
/// Polls until the bridge is loaded and the container exists in the DOM,
/// then creates the ECharts instance from the latest stored option. The
/// poll id is kept in `window.__ladPolls` so [`dispose_chart`] can cancel a
/// mount that has not happened yet.
pub fn mount_chart(container_id: &str, spec: &ChartSpec) -> anyhow::Result<()> {
    eval(&store_option_js(container_id, spec)?)?;
    let id = serde_json::to_string(container_id)?;
    let cancel = cancel_poll_js(&id);
    call_js(&format!(
        r#"
        (function() {{
            window.__ladPolls = window.__ladPolls || {{}};
            {cancel}
            var poll = setInterval(function() {{
                if (window.__ladChartsReady && document.getElementById({id})) {{
                    clearInterval(poll);
                    if (window.__ladPolls[{id}] === poll) delete window.__ladPolls[{id}];
                    try {{
                        window.ladMountChart({id});
                    }} catch(e) {{ console.error('[LAD] ladMountChart error:', e); }}
                }}
            }}, 100);
            window.__ladPolls[{id}] = poll;
        }})();
        "#,
    ));
    Ok(())
}

/// Replace the option of the chart in `container_id`.
///
/// A chart still waiting to mount picks the new option up when it does.
pub fn update_chart(container_id: &str, spec: &ChartSpec) -> anyhow::Result<()> {
    eval(&store_option_js(container_id, spec)?)?;
    let id = serde_json::to_string(container_id)?;
    call_js(&format!(
        "if (window.ladUpdateChart) {{ window.ladUpdateChart({id}); }}"
    ));
    Ok(())
}

/// Dispose the chart in `container_id`, cancel its pending mount and forget
/// its option.
pub fn dispose_chart(container_id: &str) {
    let id = serde_json::to_string(container_id).unwrap_or_default();
    call_js(&dispose_js(&id));
}

fn dispose_js(id: &str) -> String {
    format!(
        "{cancel} if (window.ladDisposeChart) {{ window.ladDisposeChart({id}); }} \
         else if (window.__ladOptions) {{ delete window.__ladOptions[{id}]; }}",
        cancel = cancel_poll_js(id),
    )
}

/// [`ChartRenderer`] backed by ECharts in the page.
#[derive(Debug, Default)]
pub struct EChartsRenderer;

impl EChartsRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ChartRenderer for EChartsRenderer {
    type Handle = EChartsHandle;

    fn mount(&mut self, target: &str, spec: &ChartSpec) -> Result<EChartsHandle, RenderError> {
        mount_chart(target, spec).map_err(|e| RenderError::Mount {
            target: target.to_string(),
            message: e.to_string(),
        })?;
        log::info!("[LAD] bridge: mounting {:?} in #{}", spec.kind, target);
        Ok(EChartsHandle {
            target: target.to_string(),
            disposed: false,
        })
    }
}

/// One ECharts instance, addressed by its container id.
#[derive(Debug)]
pub struct EChartsHandle {
    target: String,
    disposed: bool,
}

impl EChartsHandle {
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl ChartHandle for EChartsHandle {
    fn update(&mut self, spec: &ChartSpec) -> Result<(), RenderError> {
        if self.disposed {
            return Err(RenderError::Update {
                target: self.target.clone(),
                message: "chart already disposed".to_string(),
            });
        }
        update_chart(&self.target, spec).map_err(|e| RenderError::Update {
            target: self.target.clone(),
            message: e.to_string(),
        })
    }

    fn dispose(&mut self) {
        if !self.disposed {
            dispose_chart(&self.target);
            self.disposed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispose_cancels_pending_mount_first() {
        let js = dispose_js("\"pass-percentage-chart\"");
        let cancel = js.find("clearInterval(window.__ladPolls[\"pass-percentage-chart\"])");
        let dispose = js.find("window.ladDisposeChart(\"pass-percentage-chart\")");
        assert!(cancel.is_some());
        assert!(cancel < dispose);
        // Also taken before the bridge has loaded.
        assert!(cancel < js.find("delete window.__ladOptions"));
    }

    #[test]
    fn test_bridge_skips_disposed_containers() {
        let mount = ECHARTS_BRIDGE_JS
            .find("function ladMountChart")
            .unwrap();
        let body = &ECHARTS_BRIDGE_JS[mount..];
        let guard = body.find("!window.__ladOptions[containerId]) return false").unwrap();
        assert!(guard < body.find("echarts.init").unwrap());

        let dispose = ECHARTS_BRIDGE_JS.find("function ladDisposeChart").unwrap();
        assert!(ECHARTS_BRIDGE_JS[dispose..].contains("ladCancelPoll(containerId)"));
    }
}
