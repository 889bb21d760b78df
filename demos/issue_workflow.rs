//! Issue review workflow example.
//!
//! Demonstrates:
//! - Declaring status keys with `state_keys!`
//! - Manual transitions guarded on the change context
//! - Automatic transitions fired by an analysis run
//! - Collecting an audit trail through the actions context
//! - Exporting the workflow topology as JSON

use chrono::{DateTime, Utc};
use issueflow::{
    state_keys, ConfigError, StateMachine, StatefulEntity, Transition, TransitionBuilder,
    TransitionHistory, TransitionOutcome,
};

state_keys! {
    pub mod status {
        OPEN,
        CONFIRMED,
        REOPENED,
        RESOLVED,
        CLOSED,
    }
}

#[derive(Debug)]
struct Issue {
    key: String,
    status: String,
    resolution: Option<String>,
    assignee: Option<String>,
    close_date: Option<DateTime<Utc>>,
    being_closed: bool,
}

impl Issue {
    fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            status: status::OPEN.to_string(),
            resolution: None,
            assignee: None,
            close_date: None,
            being_closed: false,
        }
    }
}

impl StatefulEntity for Issue {
    fn state_key(&self) -> &str {
        &self.status
    }

    fn set_state_key(&mut self, key: &str) {
        self.status = key.to_string();
    }
}

/// Who triggered the change, and what changed.
#[derive(Debug, Default)]
struct ChangeContext {
    user: Option<String>,
    scan: bool,
    audit: Vec<String>,
    history: TransitionHistory,
}

fn transition(name: &str, from: &str, to: &str) -> TransitionBuilder<Issue, ChangeContext> {
    Transition::builder(name).from(from).to(to)
}

fn resolve_as(resolution: &'static str) -> impl Fn(&mut Issue, &mut ChangeContext) + Send + Sync {
    move |issue, ctx| {
        issue.resolution = Some(resolution.to_string());
        ctx.audit.push(format!("{}: resolution set to {resolution}", issue.key));
    }
}

fn build_workflow() -> Result<StateMachine<Issue, ChangeContext>, ConfigError> {
    let by_user = |_: &Issue, ctx: &ChangeContext| ctx.user.is_some();
    let by_scan = |_: &Issue, ctx: &ChangeContext| ctx.scan;

    let mut transitions = vec![
        transition("confirm", status::OPEN, status::CONFIRMED)
            .when(by_user)
            .build()?,
        transition("confirm", status::REOPENED, status::CONFIRMED)
            .when(by_user)
            .build()?,
        transition("unconfirm", status::CONFIRMED, status::REOPENED)
            .when(by_user)
            .build()?,
        transition("reopen", status::RESOLVED, status::REOPENED)
            .when(by_user)
            .action(|issue, _| issue.resolution = None)
            .build()?,
    ];

    for from in [status::OPEN, status::REOPENED, status::CONFIRMED] {
        transitions.push(
            transition("resolve", from, status::RESOLVED)
                .when(by_user)
                .action(resolve_as("FIXED"))
                .build()?,
        );
        transitions.push(
            transition("wontfix", from, status::RESOLVED)
                .when(by_user)
                .action(resolve_as("WONTFIX"))
                .action(|issue, _| issue.assignee = None)
                .build()?,
        );
    }

    for from in [status::OPEN, status::REOPENED, status::CONFIRMED, status::RESOLVED] {
        transitions.push(
            transition("autoclose", from, status::CLOSED)
                .when(by_scan)
                .when(|issue, _| issue.being_closed)
                .action(|issue, _| {
                    if issue.resolution.is_none() {
                        issue.resolution = Some("FIXED".to_string());
                    }
                })
                .action(|issue, _| issue.close_date = Some(Utc::now()))
                .automatic()
                .build()?,
        );
    }

    StateMachine::builder()
        .states(status::ALL)
        .transitions(transitions)
        .build()
}

fn record(ctx: &mut ChangeContext, outcome: &TransitionOutcome) {
    match outcome {
        TransitionOutcome::Fired(record) => {
            println!("  {} -> {} via '{}'", record.from, record.to, record.transition);
            ctx.history = ctx.history.record(record.clone());
        }
        TransitionOutcome::Rejected { transition, from } => {
            println!("  '{transition}' not allowed from {from}");
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let workflow = build_workflow()?;

    println!("=== Issue Workflow Example ===\n");
    println!("Statuses: {}", workflow.state_keys().join(", "));

    let mut issue = Issue::new("ISSUE-1");
    let mut ctx = ChangeContext {
        user: Some("alice".to_string()),
        ..ChangeContext::default()
    };

    let available: Vec<&str> = workflow
        .out_transitions(&issue, &ctx)?
        .iter()
        .map(|t| t.key())
        .collect();
    println!("Available from {}: {}\n", issue.status, available.join(", "));

    println!("User actions:");
    for name in ["confirm", "resolve", "reopen"] {
        let outcome = workflow.fire(&mut issue, name, &mut ctx)?;
        record(&mut ctx, &outcome);
    }

    println!("\nAnalysis run:");
    let mut scan = ChangeContext {
        scan: true,
        ..ChangeContext::default()
    };
    let outcome = workflow.fire(&mut issue, "resolve", &mut scan)?;
    record(&mut scan, &outcome);

    issue.being_closed = true;
    if let Some(outcome) = workflow.fire_automatic(&mut issue, &mut scan)? {
        record(&mut scan, &outcome);
    }

    println!("\nFinal issue: {issue:#?}");
    println!("User path: {}", ctx.history.path().join(" -> "));
    println!("Audit: {:?}", ctx.audit);

    match workflow.fire(&mut issue, "resolve", &mut ctx) {
        Ok(_) => println!("\nUnexpected: closed issue accepted 'resolve'"),
        Err(err) => println!("\nLookup error: {err}"),
    }

    println!("\nTopology:\n{}", workflow.describe().to_json()?);

    Ok(())
}
