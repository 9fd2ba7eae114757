//! Grafana HTTP API operations.
//!
//! One function per operation, generic over [`Transport`]. Each builds the
//! request, sends it, and shapes the response the way the command layer
//! expects (absolute URLs, `id` keys, wrapped lists).
//!
//! [`Transport`]: crate::transport::Transport

mod alerts;
mod annotations;
mod dashboards;
mod orgs;
mod shaping;
mod teams;
pub mod url_encoding;
mod users;

pub use alerts::{get_alert, list_alerts, set_alert_paused};
pub use annotations::create_annotation;
pub use dashboards::search_dashboards;
pub use orgs::{create_org, get_org_by_id, get_org_by_name, list_orgs};
pub use teams::{
    add_team, add_user_to_team, delete_team, get_team, get_team_members, remove_user_from_team,
    search_teams,
};
pub use url_encoding::encode_path_segment;
pub use users::{get_user, get_user_orgs, get_user_teams, search_users, update_user};
