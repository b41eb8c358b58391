//! Resource type descriptor table
//!
//! One entry per supported resource type. The sweep logic is entirely
//! generic; everything type-specific lives here: the lifecycle state that
//! counts as "running", the oci CLI paths of the list and stop operations,
//! the identifier flag the stop operation takes, the JSON key carrying the
//! display name, and any auxiliary stop payload (MySQL's shutdown speed,
//! compute's action selector).

/// Static configuration for one supported resource type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceTypeDescriptor {
    /// Selector accepted on the command line
    pub tag: &'static str,
    /// Human-readable resource name used in progress and error text
    pub label: &'static str,
    /// Lifecycle state meaning "currently running/active" for this type
    pub running_state: &'static str,
    /// oci CLI path of the list operation
    pub list_cmd: &'static [&'static str],
    /// oci CLI path of the stop/deactivate operation
    pub stop_cmd: &'static [&'static str],
    /// Identifier flag of the stop operation
    pub id_flag: &'static str,
    /// JSON key carrying the display name on listed records
    pub name_field: &'static str,
    /// Extra arguments the stop operation requires
    pub stop_args: &'static [&'static str],
    /// Verb used in failure messages
    pub action_label: &'static str,
}

/// All supported resource types
pub const RESOURCE_TYPES: &[ResourceTypeDescriptor] = &[
    ResourceTypeDescriptor {
        tag: "compute",
        label: "Compute Instance",
        running_state: "RUNNING",
        list_cmd: &["compute", "instance", "list"],
        stop_cmd: &["compute", "instance", "action"],
        id_flag: "--instance-id",
        name_field: "display-name",
        stop_args: &["--action", "STOP"],
        action_label: "stop",
    },
    ResourceTypeDescriptor {
        tag: "autonomous_database",
        label: "Autonomous Database",
        running_state: "AVAILABLE",
        list_cmd: &["db", "autonomous-database", "list"],
        stop_cmd: &["db", "autonomous-database", "stop"],
        id_flag: "--autonomous-database-id",
        name_field: "db-name",
        stop_args: &[],
        action_label: "stop",
    },
    ResourceTypeDescriptor {
        tag: "generative_ai",
        label: "Generative AI Endpoint",
        running_state: "ACTIVE",
        list_cmd: &["generative-ai", "endpoint", "list"],
        stop_cmd: &["generative-ai", "endpoint", "deactivate"],
        id_flag: "--endpoint-id",
        name_field: "display-name",
        stop_args: &[],
        action_label: "deactivate",
    },
    ResourceTypeDescriptor {
        tag: "visualbuilder",
        label: "Visual Builder Instance",
        running_state: "ACTIVE",
        list_cmd: &["visual-builder", "vb-instance", "list"],
        stop_cmd: &["visual-builder", "vb-instance", "stop"],
        id_flag: "--vb-instance-id",
        name_field: "display-name",
        stop_args: &[],
        action_label: "stop",
    },
    ResourceTypeDescriptor {
        tag: "ai_language",
        label: "AI Language Endpoint",
        running_state: "ACTIVE",
        list_cmd: &["ai", "language", "endpoint", "list"],
        stop_cmd: &["ai", "language", "endpoint", "deactivate"],
        id_flag: "--endpoint-id",
        name_field: "display-name",
        stop_args: &[],
        action_label: "deactivate",
    },
    ResourceTypeDescriptor {
        tag: "analytics_cloud",
        label: "Analytics Instance",
        running_state: "ACTIVE",
        list_cmd: &["analytics", "analytics-instance", "list"],
        stop_cmd: &["analytics", "analytics-instance", "stop"],
        id_flag: "--analytics-instance-id",
        name_field: "name",
        stop_args: &[],
        action_label: "stop",
    },
    ResourceTypeDescriptor {
        tag: "data_science",
        label: "Data Science Notebook Session",
        running_state: "ACTIVE",
        list_cmd: &["data-science", "notebook-session", "list"],
        stop_cmd: &["data-science", "notebook-session", "deactivate"],
        id_flag: "--notebook-session-id",
        name_field: "display-name",
        stop_args: &[],
        action_label: "deactivate",
    },
    ResourceTypeDescriptor {
        tag: "ai_data_platform",
        label: "AI Data Platform Pipeline Run",
        running_state: "ACTIVE",
        list_cmd: &["ai-data-platform", "pipeline-run", "list"],
        stop_cmd: &["ai-data-platform", "pipeline-run", "deactivate"],
        id_flag: "--pipeline-run-id",
        name_field: "display-name",
        stop_args: &[],
        action_label: "deactivate",
    },
    ResourceTypeDescriptor {
        tag: "mysql",
        label: "MySQL DB System",
        running_state: "ACTIVE",
        list_cmd: &["mysql", "db-system", "list"],
        stop_cmd: &["mysql", "db-system", "stop"],
        id_flag: "--db-system-id",
        name_field: "display-name",
        stop_args: &["--shutdown-type", "FAST"],
        action_label: "stop",
    },
    ResourceTypeDescriptor {
        tag: "integration_cloud",
        label: "Integration Instance",
        running_state: "ACTIVE",
        list_cmd: &["integration", "integration-instance", "list"],
        stop_cmd: &["integration", "integration-instance", "stop"],
        id_flag: "--id",
        name_field: "display-name",
        stop_args: &[],
        action_label: "stop",
    },
    ResourceTypeDescriptor {
        tag: "big_data",
        label: "Big Data Cluster",
        running_state: "ACTIVE",
        list_cmd: &["bds", "instance", "list"],
        stop_cmd: &["bds", "instance", "stop"],
        id_flag: "--bds-instance-id",
        name_field: "display-name",
        stop_args: &[],
        action_label: "stop",
    },
    ResourceTypeDescriptor {
        tag: "oracle_digital_assistant",
        label: "Digital Assistant Instance",
        running_state: "ACTIVE",
        list_cmd: &["oda", "oda-instance", "list"],
        stop_cmd: &["oda", "oda-instance", "stop"],
        id_flag: "--oda-instance-id",
        name_field: "display-name",
        stop_args: &[],
        action_label: "stop",
    },
    ResourceTypeDescriptor {
        tag: "data_integration",
        label: "Data Integration Pipeline Run",
        running_state: "ACTIVE",
        list_cmd: &["data-integration", "pipeline-run", "list"],
        stop_cmd: &["data-integration", "pipeline-run", "deactivate"],
        id_flag: "--pipeline-run-id",
        name_field: "display-name",
        stop_args: &[],
        action_label: "deactivate",
    },
    ResourceTypeDescriptor {
        tag: "network_firewall",
        label: "Network Firewall",
        running_state: "ACTIVE",
        list_cmd: &["network-firewall", "network-firewall", "list"],
        stop_cmd: &["network-firewall", "network-firewall", "stop"],
        id_flag: "--network-firewall-id",
        name_field: "display-name",
        stop_args: &[],
        action_label: "stop",
    },
    ResourceTypeDescriptor {
        tag: "blockchain_cloud_service",
        label: "Blockchain Platform",
        running_state: "ACTIVE",
        list_cmd: &["blockchain", "blockchain-platform", "list"],
        stop_cmd: &["blockchain", "blockchain-platform", "stop"],
        id_flag: "--blockchain-platform-id",
        name_field: "display-name",
        stop_args: &[],
        action_label: "stop",
    },
    ResourceTypeDescriptor {
        tag: "opensearch",
        label: "OpenSearch Cluster",
        running_state: "ACTIVE",
        list_cmd: &["opensearch", "cluster", "list"],
        stop_cmd: &["opensearch", "cluster", "stop"],
        id_flag: "--opensearch-cluster-id",
        name_field: "display-name",
        stop_args: &[],
        action_label: "stop",
    },
    ResourceTypeDescriptor {
        tag: "redis",
        label: "Redis Cluster",
        running_state: "ACTIVE",
        list_cmd: &["redis", "redis-cluster", "list"],
        stop_cmd: &["redis", "redis-cluster", "stop"],
        id_flag: "--redis-cluster-id",
        name_field: "display-name",
        stop_args: &[],
        action_label: "stop",
    },
];

/// Look up a descriptor by its command-line tag (case-insensitive).
///
/// Returns `None` for unknown tags; the sweep driver turns that into a
/// per-scope skip rather than an error.
pub fn lookup(tag: &str) -> Option<&'static ResourceTypeDescriptor> {
    RESOURCE_TYPES.iter().find(|d| d.tag.eq_ignore_ascii_case(tag))
}
