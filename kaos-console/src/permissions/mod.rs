//! Role-based permissions for console operators
//!
//! The console does not negotiate permissions with the backend. Each role
//! maps to a fixed set of capabilities, and every page or command checks
//! the operator's role against this table before offering an action.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Operator role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Developer,
    Moderator,
    #[default]
    Viewer,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Developer, Role::Moderator, Role::Viewer];

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Developer => "developer",
            Role::Moderator => "moderator",
            Role::Viewer => "viewer",
        }
    }

    /// Permissions granted to this role
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Role::Admin => Permission::ALL,
            Role::Developer => DEVELOPER,
            Role::Moderator => MODERATOR,
            Role::Viewer => VIEWER,
        }
    }

    /// Check whether this role grants `permission`
    pub fn can(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single console capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewDashboard,
    ViewSessions,
    KickSessions,
    ViewRooms,
    CloseRooms,
    ViewAccounts,
    BanAccounts,
    DeleteAccounts,
    ViewLeaderboards,
    ManageLeaderboards,
    ViewChat,
    ModerateChat,
    ViewMatchmaker,
    ManageMatchmaker,
    ViewTournaments,
    ManageTournaments,
    ViewScripts,
    ReloadScripts,
    InvokeRpc,
    ManageRoles,
}

impl Permission {
    pub const ALL: &'static [Permission] = &[
        Permission::ViewDashboard,
        Permission::ViewSessions,
        Permission::KickSessions,
        Permission::ViewRooms,
        Permission::CloseRooms,
        Permission::ViewAccounts,
        Permission::BanAccounts,
        Permission::DeleteAccounts,
        Permission::ViewLeaderboards,
        Permission::ManageLeaderboards,
        Permission::ViewChat,
        Permission::ModerateChat,
        Permission::ViewMatchmaker,
        Permission::ManageMatchmaker,
        Permission::ViewTournaments,
        Permission::ManageTournaments,
        Permission::ViewScripts,
        Permission::ReloadScripts,
        Permission::InvokeRpc,
        Permission::ManageRoles,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Permission::ViewDashboard => "view_dashboard",
            Permission::ViewSessions => "view_sessions",
            Permission::KickSessions => "kick_sessions",
            Permission::ViewRooms => "view_rooms",
            Permission::CloseRooms => "close_rooms",
            Permission::ViewAccounts => "view_accounts",
            Permission::BanAccounts => "ban_accounts",
            Permission::DeleteAccounts => "delete_accounts",
            Permission::ViewLeaderboards => "view_leaderboards",
            Permission::ManageLeaderboards => "manage_leaderboards",
            Permission::ViewChat => "view_chat",
            Permission::ModerateChat => "moderate_chat",
            Permission::ViewMatchmaker => "view_matchmaker",
            Permission::ManageMatchmaker => "manage_matchmaker",
            Permission::ViewTournaments => "view_tournaments",
            Permission::ManageTournaments => "manage_tournaments",
            Permission::ViewScripts => "view_scripts",
            Permission::ReloadScripts => "reload_scripts",
            Permission::InvokeRpc => "invoke_rpc",
            Permission::ManageRoles => "manage_roles",
        }
    }

    /// Whether this permission only reads state
    pub fn is_read_only(&self) -> bool {
        self.display_name().starts_with("view_")
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

const DEVELOPER: &[Permission] = &[
    Permission::ViewDashboard,
    Permission::ViewSessions,
    Permission::ViewRooms,
    Permission::ViewAccounts,
    Permission::ViewLeaderboards,
    Permission::ManageLeaderboards,
    Permission::ViewChat,
    Permission::ViewMatchmaker,
    Permission::ManageMatchmaker,
    Permission::ViewTournaments,
    Permission::ManageTournaments,
    Permission::ViewScripts,
    Permission::ReloadScripts,
    Permission::InvokeRpc,
];

const MODERATOR: &[Permission] = &[
    Permission::ViewDashboard,
    Permission::ViewSessions,
    Permission::KickSessions,
    Permission::ViewRooms,
    Permission::CloseRooms,
    Permission::ViewAccounts,
    Permission::BanAccounts,
    Permission::ViewLeaderboards,
    Permission::ViewChat,
    Permission::ModerateChat,
    Permission::ViewTournaments,
];

const VIEWER: &[Permission] = &[
    Permission::ViewDashboard,
    Permission::ViewSessions,
    Permission::ViewRooms,
    Permission::ViewAccounts,
    Permission::ViewLeaderboards,
    Permission::ViewChat,
    Permission::ViewMatchmaker,
    Permission::ViewTournaments,
    Permission::ViewScripts,
];

/// Fail with a descriptive error unless `role` grants `permission`
pub fn require(role: Role, permission: Permission) -> anyhow::Result<()> {
    if !role.can(permission) {
        anyhow::bail!(
            "Role '{}' does not have the '{}' permission",
            role,
            permission
        );
    }
    log::debug!("Role '{}' granted '{}'", role, permission);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_has_everything() {
        for permission in Permission::ALL {
            assert!(Role::Admin.can(*permission), "admin missing {}", permission);
        }
    }

    #[test]
    fn test_viewer_is_read_only() {
        assert!(Role::Viewer.permissions().iter().all(|p| p.is_read_only()));
        assert!(Role::Viewer.can(Permission::ViewScripts));
        assert!(!Role::Viewer.can(Permission::BanAccounts));
    }

    #[test]
    fn test_moderator_cannot_see_scripts() {
        assert!(Role::Moderator.can(Permission::KickSessions));
        assert!(Role::Moderator.can(Permission::BanAccounts));
        assert!(Role::Moderator.can(Permission::ModerateChat));
        assert!(!Role::Moderator.can(Permission::ViewScripts));
        assert!(!Role::Moderator.can(Permission::DeleteAccounts));
    }

    #[test]
    fn test_only_admin_manages_roles() {
        for role in Role::ALL {
            assert_eq!(role.can(Permission::ManageRoles), role == Role::Admin);
        }
    }

    #[test]
    fn test_role_tables_have_no_duplicates() {
        for role in Role::ALL {
            let perms = role.permissions();
            let unique: std::collections::HashSet<_> = perms.iter().collect();
            assert_eq!(unique.len(), perms.len(), "duplicate permission for {}", role);
        }
    }

    #[test]
    fn test_require() {
        assert!(require(Role::Developer, Permission::InvokeRpc).is_ok());
        let err = require(Role::Moderator, Permission::ViewScripts).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Role 'moderator' does not have the 'view_scripts' permission"
        );
    }

    #[test]
    fn test_role_serde_names() {
        let role: Role = toml::from_str::<std::collections::HashMap<String, Role>>("r = \"developer\"")
            .unwrap()["r"];
        assert_eq!(role, Role::Developer);
        assert_eq!(serde_json::to_string(&Permission::InvokeRpc).unwrap(), "\"invoke_rpc\"");
    }
}
