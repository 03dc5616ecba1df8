//! Round trips through the real persisted store.
//!
//! `TSYS_CREDENTIALS_DIR` points the file tier at a jail-owned directory and
//! `TSYS_KEYRING_SERVICE` keeps the keyring entries away from any real
//! credentials. Whichever tier ends up holding the token, a later
//! `Session::load()` must observe exactly what `login` stored.

use pretty_assertions::assert_eq;
use tsys_auth::{Session, session};

#[test]
fn login_load_logout_round_trip() {
    figment::Jail::expect_with(|jail| {
        jail.set_env(
            "TSYS_CREDENTIALS_DIR",
            jail.directory().display().to_string(),
        );
        jail.set_env("TSYS_KEYRING_SERVICE", "tsys-test-round-trip");

        let stored = session::login("tok-abc", Some("admin")).expect("login should persist");
        assert!(stored.is_authenticated());

        let restored = Session::load();
        assert_eq!(restored.token.as_deref(), Some("tok-abc"));
        assert_eq!(restored.role.as_deref(), Some("admin"));

        session::logout().expect("logout should clear the store");
        let cleared = Session::load();
        assert!(!cleared.is_authenticated());
        assert!(cleared.role.is_none());
        Ok(())
    });
}

#[test]
fn login_without_role_drops_the_previous_role() {
    figment::Jail::expect_with(|jail| {
        jail.set_env(
            "TSYS_CREDENTIALS_DIR",
            jail.directory().display().to_string(),
        );
        jail.set_env("TSYS_KEYRING_SERVICE", "tsys-test-stale-role");

        session::login("tok-1", Some("admin")).expect("first login should persist");
        session::login("tok-2", None).expect("second login should persist");

        let restored = Session::load();
        assert_eq!(restored.token.as_deref(), Some("tok-2"));
        assert!(
            restored.role.is_none(),
            "a role-less login must not read back the previous role"
        );

        session::logout().expect("cleanup");
        Ok(())
    });
}
