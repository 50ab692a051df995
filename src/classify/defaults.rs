use super::table::{Classification, MappingEntry, MappingTable};

/// Defines a function returning an ordered `MappingTable` from a list of
/// `(keyword, action, group)` rows plus a fallback pair.
macro_rules! define_mapping_table {
    ( $(#[$meta:meta])* $fn_name:ident, fallback = ($fb_action:expr, $fb_group:expr); $( ($keyword:expr, $action:expr, $group:expr) ),* $(,)? ) => {
        $(#[$meta])*
        pub fn $fn_name() -> MappingTable {
            MappingTable::new(
                vec![ $( MappingEntry::new($keyword, $action, $group), )* ],
                Classification::new($fb_action, $fb_group),
            )
        }
    };
}

define_mapping_table! {
    /// Dashboard buttons, matched against the label and then the name.
    button_table, fallback = ("unknown", "Unknown");
    ("kylar", "showKylar", "Kylar"),
    ("frysar", "showFrysar", "Frysar"),
    ("controllers", "showControllers", "Controllers"),
    ("maskiner", "showMachines", "Machines"),
    ("machines", "showMachines", "Machines"),
    ("larm", "showAlarms", "Alarms"),
    ("alarms", "showAlarms", "Alarms"),
    ("refresh", "refresh", "System"),
    ("uppdatera", "refresh", "System"),
    ("serviceläge", "toggleService", "Service"),
    ("snabbdiagnos", "runDiagnostics", "System"),
    ("ping", "pingTest", "Network"),
    ("port", "portTest", "Network"),
    ("modbus", "modbusTest", "Modbus"),
    ("börvärde", "setSetpoint", "Controllers"),
    ("on/off", "togglePower", "Controllers"),
    ("export", "exportBackup", "System"),
    ("backup", "exportBackup", "System"),
}

define_mapping_table! {
    /// Processing nodes, matched against the node name. Names here tend to describe
    /// the handler ("Get alarms", "Hämta maskiner").
    processing_table, fallback = ("processData", "Data");
    ("kylar", "showKylar", "Kylar"),
    ("frysar", "showFrysar", "Frysar"),
    ("controller", "showControllers", "Controllers"),
    ("maskin", "showMachines", "Machines"),
    ("machine", "showMachines", "Machines"),
    ("larm", "showAlarms", "Alarms"),
    ("alarm", "showAlarms", "Alarms"),
    ("nod", "showNodes", "Nodes"),
    ("node", "showNodes", "Nodes"),
    ("gauge", "showMachineGauges", "Machines"),
    ("layout", "showLayout", "Layout"),
    ("summary", "showSummary", "Summary"),
    ("hämta", "getData", "Data"),
    ("get", "getData", "Data"),
    ("lägg till", "addItem", "Data"),
    ("add", "addItem", "Data"),
}

define_mapping_table! {
    /// Emitter nodes, matched against the node name. Names here are purpose phrases
    /// ("Show machines", "Startup"), so multi-word phrases come first.
    emitter_table, fallback = ("processData", "Data");
    ("fake freq maskin", "updateMachine", "Machines"),
    ("maskin", "showMachines", "Machines"),
    ("machine", "showMachines", "Machines"),
    ("kylar", "showKylar", "Kylar"),
    ("frysar", "showFrysar", "Frysar"),
    ("controller", "showControllers", "Controllers"),
    ("regulator", "showControllers", "Controllers"),
    ("larm", "showAlarms", "Alarms"),
    ("alarm", "showAlarms", "Alarms"),
    ("nod", "showNodes", "Nodes"),
    ("node", "showNodes", "Nodes"),
    ("lägg till", "addItem", "Data"),
    ("visa alla", "showAll", "Data"),
    ("refboard", "updateRefboard", "Refboard"),
    ("startup", "initData", "System"),
}

/// Actions the synthetic router branches on, in branch order.
pub fn router_actions() -> Vec<String> {
    [
        "showControllers",
        "showKylar",
        "showFrysar",
        "showMachines",
        "showAlarms",
        "showNodes",
        "refresh",
        "navigate",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
