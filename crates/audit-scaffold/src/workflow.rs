//! n8n workflow template
//!
//! Typed representation of the automation workflow shipped with the project
//! package: a weekday-evening cron trigger, the orchestrator invocation, and
//! a Slack notification. Field names follow n8n's camelCase wire format.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;

/// A single n8n node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct N8nNode {
    pub parameters: serde_json::Value,
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(rename = "typeVersion")]
    pub type_version: u32,
    pub position: [i32; 2],
}

/// Outgoing connection to another node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionTarget {
    pub node: String,
    #[serde(rename = "type")]
    pub connection_type: String,
    pub index: u32,
}

/// All outgoing connections of one node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConnections {
    pub main: Vec<Vec<ConnectionTarget>>,
}

/// Workflow-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowSettings {
    pub timezone: String,
    #[serde(rename = "saveExecutionProgress")]
    pub save_execution_progress: bool,
}

/// Workflow template metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowMeta {
    #[serde(rename = "templateCreatedBy")]
    pub template_created_by: String,
    #[serde(rename = "templateId")]
    pub template_id: String,
}

/// A complete n8n workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct N8nWorkflow {
    pub name: String,
    pub nodes: Vec<N8nNode>,
    pub connections: BTreeMap<String, NodeConnections>,
    pub settings: WorkflowSettings,
    pub meta: WorkflowMeta,
}

fn main_connection(target: &str) -> NodeConnections {
    NodeConnections {
        main: vec![vec![ConnectionTarget {
            node: target.to_string(),
            connection_type: "main".to_string(),
            index: 0,
        }]],
    }
}

/// The daily stock-analysis workflow template
///
/// Runs the orchestrator on the screener output every weekday at 23:00 JST
/// and posts the result to Slack.
pub fn stock_analysis_workflow() -> N8nWorkflow {
    let nodes = vec![
        N8nNode {
            parameters: json!({
                "rule": {
                    "interval": [{"field": "cronExpression", "cronExpression": "0 23 * * 1-5"}]
                }
            }),
            id: "cron-trigger".to_string(),
            name: "Daily Market Analysis".to_string(),
            node_type: "n8n-nodes-base.cron".to_string(),
            type_version: 1,
            position: [240, 300],
        },
        N8nNode {
            parameters: json!({
                "command": "${PROJECT_ROOT}/target/release/orchestrator evaluate --input ${SCREENER_OUTPUT} --verbose"
            }),
            id: "screener-exec".to_string(),
            name: "Execute Stock Screener".to_string(),
            node_type: "n8n-nodes-base.executeCommand".to_string(),
            type_version: 1,
            position: [440, 300],
        },
        N8nNode {
            parameters: json!({
                "channel": "${SLACK_CHANNEL}",
                "text": "📊 *株式分析完了* - {{ $json.timestamp }}\n\n*スコア*: {{ $json.total_score }}/120\n*推奨アクション*: {{ $json.recommendation }}"
            }),
            id: "slack-notification".to_string(),
            name: "Slack Notification".to_string(),
            node_type: "n8n-nodes-base.slack".to_string(),
            type_version: 1,
            position: [640, 300],
        },
    ];

    let mut connections = BTreeMap::new();
    connections.insert(
        "Daily Market Analysis".to_string(),
        main_connection("Execute Stock Screener"),
    );
    connections.insert(
        "Execute Stock Screener".to_string(),
        main_connection("Slack Notification"),
    );

    N8nWorkflow {
        name: "Stock AI Analysis Workflow".to_string(),
        nodes,
        connections,
        settings: WorkflowSettings {
            timezone: "Asia/Tokyo".to_string(),
            save_execution_progress: true,
        },
        meta: WorkflowMeta {
            template_created_by: "AI Stock Analysis System".to_string(),
            template_id: "stock-ai-workflow-v1.0.0".to_string(),
        },
    }
}
