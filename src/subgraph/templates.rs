//! Code bodies and documentation text for the synthetic examples container.
//!
//! Every processing body produced here contains the configured marker exactly once,
//! so the processing rule leaves the generated records alone on later runs.

use crate::classify::Classification;
use crate::config::NormalizerConfig;
use crate::rules::header::render_header;
use itertools::Itertools;

const SEPARATOR: &str =
    "// ═══════════════════════════════════════════════════════════════════════════";

/// One of the per-group example handlers.
pub struct ExampleHandler {
    pub id_prefix: &'static str,
    pub title: &'static str,
    pub classification: Classification,
    pub logic: &'static str,
}

pub fn example_handlers() -> Vec<ExampleHandler> {
    vec![
        ExampleHandler {
            id_prefix: "bp-controllers",
            title: "Controllers",
            classification: Classification::new("showControllers", "Controllers"),
            logic: CONTROLLERS_LOGIC,
        },
        ExampleHandler {
            id_prefix: "bp-machines",
            title: "Machines",
            classification: Classification::new("showMachines", "Machines"),
            logic: MACHINES_LOGIC,
        },
        ExampleHandler {
            id_prefix: "bp-alarms",
            title: "Alarms",
            classification: Classification::new("showAlarms", "Alarms"),
            logic: ALARMS_LOGIC,
        },
    ]
}

fn banner(lines: &[&str]) -> String {
    std::iter::once(SEPARATOR.to_string())
        .chain(lines.iter().map(|l| format!("// {}", l)))
        .chain(std::iter::once(SEPARATOR.to_string()))
        .join("\n")
}

/// Body of an example handler: banner, header, then the handler logic.
pub fn example_body(example: &ExampleHandler, config: &NormalizerConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        banner(&[format!("EXAMPLE: {} handler", example.title).as_str()]),
        render_header(&config.header_title, &example.classification),
        example.logic
    )
}

/// Every distinct action from the configured tables with the group it implies,
/// in first-seen order.
pub fn action_groups(config: &NormalizerConfig) -> Vec<(String, String)> {
    [
        &config.button_table,
        &config.processing_table,
        &config.emitter_table,
    ]
    .into_iter()
    .flat_map(|table| table.entries.iter())
    .unique_by(|entry| entry.action.clone())
    .map(|entry| (entry.action.clone(), entry.group.clone()))
    .collect()
}

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// The standalone handler that applies the same defaults as the header, but derives
/// them from the incoming message instead of from a node name.
pub fn safe_handler_body(config: &NormalizerConfig) -> String {
    let known_actions = config.router_actions.iter().map(|a| quote(a)).join(", ");
    let group_lookup = action_groups(config)
        .iter()
        .map(|(action, group)| format!("    {}: {}", quote(action), quote(group)))
        .join(",\n");

    format!(
        r#"{banner}

msg = msg || {{}};

// Routable actions: {known_actions}
if (!msg.action || typeof msg.action !== 'string') {{
    if (msg.topic && typeof msg.topic === 'string') {{
        msg.action = msg.topic;
    }} else if (msg.payload && typeof msg.payload === 'object' && msg.payload.action) {{
        msg.action = msg.payload.action;
    }} else {{
        msg.action = 'unknown';
        node.warn('msg.action missing, defaulted to "unknown"');
    }}
}}

if (!msg.group || typeof msg.group !== 'string') {{
    const actionToGroup = {{
{group_lookup}
    }};
    msg.group = actionToGroup[msg.action] || 'Unknown';
    if (msg.group === 'Unknown') {{
        node.warn('msg.group could not be derived, defaulted to "Unknown"');
    }}
}}

msg._meta = msg._meta || {{}};
msg._meta.timestamp = msg._meta.timestamp || new Date().toISOString();
msg._meta.handler = 'UniversalSafeHandler';

if (msg.payload === null || msg.payload === undefined) {{
    msg.payload = {{}};
}}

node.status({{ fill: 'green', shape: 'dot', text: `${{msg.action}} → ${{msg.group}}` }});
return msg;"#,
        banner = banner(&[
            "UNIVERSAL SAFE HANDLER",
            format!(
                "Standalone form of the {} block: guarantees msg.action and msg.group",
                config.marker
            )
            .as_str(),
        ]),
    )
}

/// Markdown documentation for the comment node.
pub fn standard_doc(config: &NormalizerConfig) -> String {
    let actions = action_groups(config)
        .into_iter()
        .into_group_map_by(|(_, group)| group.clone());
    let sections = actions
        .iter()
        .sorted_by(|a, b| a.0.cmp(b.0))
        .map(|(group, entries)| {
            let items = entries
                .iter()
                .map(|(action, _)| format!("- `{}`", action))
                .join("\n");
            format!("### {}\n{}", group, items)
        })
        .join("\n\n");
    let routed = config
        .router_actions
        .iter()
        .map(|a| format!("`{}`", a))
        .join(", ");

    format!(
        r#"# Reflink Message Standard

Every message that is dispatched carries two fields:

| Field | Type | Meaning |
|-------|------|---------|
| `msg.action` | string | What should happen, e.g. `showControllers` |
| `msg.group` | string | Which category it belongs to, e.g. `Controllers` |

## Known actions

{sections}

## Routing

The Action Router branches on exact matches of {routed}; anything else leaves through the last output.

## Conventions

1. Every function node starts with the header, right after its comment banner:

```javascript
msg.action = msg.action || 'showControllers';
msg.group = msg.group || 'Controllers';
```

2. Inject nodes set both `action` and `group` as string properties.
3. Use `||` defaults so explicit values are never overwritten.
"#
    )
}

const CONTROLLERS_LOGIC: &str = r#"const controllers = global.get('reflink.regulators') || [];
const setpoint = (c) => parseFloat((c.setpoint || '0').toString().replace(/[^0-9.-]/g, ''));

let result;
switch (msg.action) {
    case 'showKylar':
        result = controllers.filter(c => !isNaN(setpoint(c)) && setpoint(c) >= 0);
        msg.group = 'Kylar';
        break;
    case 'showFrysar':
        result = controllers.filter(c => !isNaN(setpoint(c)) && setpoint(c) < 0);
        msg.group = 'Frysar';
        break;
    default:
        result = controllers;
}

msg.controllers = result;
msg.payload = result;
msg.count = result.length;
node.status({ fill: result.length > 0 ? 'green' : 'yellow', shape: 'dot', text: `${msg.action}: ${result.length}` });
return msg;"#;

const MACHINES_LOGIC: &str = r#"const maxHz = 70;
const machines = (global.get('reflink.machines') || []).map(m => ({
    ...m,
    freqHz: ((m.capacityPercent || 0) / 100 * maxHz).toFixed(1) + ' Hz',
    status: m.capacityPercent > 80 ? 'high' : (m.capacityPercent > 50 ? 'normal' : 'low')
}));

msg.machines = machines;
msg.payload = machines;
msg.count = machines.length;
node.status({ fill: 'green', shape: 'dot', text: `${machines.length} machines` });
return msg;"#;

const ALARMS_LOGIC: &str = r#"const reflink = global.get('reflink') || {};
const alarms = reflink.alarms || { active: [], summary: { total: 0, critical: 0, warning: 0 } };

switch (msg.action) {
    case 'alarmSummary': {
        const s = alarms.summary;
        msg.payload = s.total === 0
            ? 'No active alarms'
            : `${s.total} alarms, ${s.critical} critical, ${s.warning} warnings`;
        break;
    }
    case 'latestAlarms':
        msg.payload = [...alarms.active]
            .sort((a, b) => new Date(b.timestamp) - new Date(a.timestamp))
            .slice(0, 5);
        break;
    default:
        msg.payload = alarms.active;
}

msg.alarms = alarms.active;
msg.count = alarms.active.length;
const fill = alarms.summary.critical > 0 ? 'red' : (alarms.summary.warning > 0 ? 'yellow' : 'green');
node.status({ fill, shape: 'dot', text: `${alarms.active.length} alarms` });
return msg;"#;
