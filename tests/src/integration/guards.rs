//! # Guard Tests
//!
//! Negative paths across the contract surfaces: every rejected invocation
//! must leave the ledger exactly as it was.

#[cfg(test)]
mod tests {
    use crate::harness::Network;
    use regnet_core::RegistryError;

    #[test]
    fn test_duplicate_registration_keeps_original_submitter() {
        let mut network = Network::new();
        network
            .as_user(
                "users-org/alice",
                "requestNewUser",
                &["Alice", "alice@example.com", "555-0100", "A1"],
            )
            .unwrap();

        let err = network
            .as_user(
                "users-org/impostor",
                "requestNewUser",
                &["Alice", "other@example.com", "555-9999", "A1"],
            )
            .unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyExists { .. }));

        let doc = network
            .as_user("observer", "viewUser", &["Alice", "A1"])
            .unwrap();
        assert_eq!(doc["submitted_by"], "users-org/alice");
        assert_eq!(doc["email"], "alice@example.com");
    }

    #[test]
    fn test_same_name_different_national_id_are_distinct_accounts() {
        let mut network = Network::new();
        network
            .as_user(
                "users-org/a",
                "requestNewUser",
                &["Alice", "a@example.com", "555-0001", "A1"],
            )
            .unwrap();
        network
            .as_user(
                "users-org/b",
                "requestNewUser",
                &["Alice", "b@example.com", "555-0002", "A2"],
            )
            .unwrap();

        let first = network.as_user("observer", "viewUser", &["Alice", "A1"]).unwrap();
        let second = network.as_user("observer", "viewUser", &["Alice", "A2"]).unwrap();
        assert_eq!(first["email"], "a@example.com");
        assert_eq!(second["email"], "b@example.com");
    }

    #[test]
    fn test_double_approval_is_rejected_and_audit_trail_survives() {
        let mut network = Network::new();
        network
            .as_user(
                "users-org/alice",
                "requestNewUser",
                &["Alice", "alice@example.com", "555-0100", "A1"],
            )
            .unwrap();
        network
            .as_registrar("registrar-org/r1", "approveNewUser", &["Alice", "A1"])
            .unwrap();

        let err = network
            .as_registrar("registrar-org/r2", "approveNewUser", &["Alice", "A1"])
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidState { .. }));

        // The first registrar remains on record.
        let doc = network
            .as_registrar("registrar-org/r2", "viewUser", &["Alice", "A1"])
            .unwrap();
        assert_eq!(doc["approved_by"], "registrar-org/r1");
    }

    #[test]
    fn test_view_of_missing_records_fails_not_found() {
        let mut network = Network::new();
        assert!(matches!(
            network.as_user("observer", "viewUser", &["Ghost", "G1"]),
            Err(RegistryError::NotFound { .. })
        ));
        assert!(matches!(
            network.as_user("observer", "viewProperty", &["P404"]),
            Err(RegistryError::NotFound { .. })
        ));
    }

    #[test]
    fn test_recharge_before_approval_is_rejected() {
        let mut network = Network::new();
        network
            .as_user(
                "users-org/alice",
                "requestNewUser",
                &["Alice", "alice@example.com", "555-0100", "A1"],
            )
            .unwrap();

        let err = network
            .as_user("users-org/alice", "rechargeAccount", &["Alice", "A1", "upg100"])
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidState { .. }));
    }

    #[test]
    fn test_unknown_topup_code_leaves_balance_unchanged() {
        let mut network = Network::new();
        network.onboard("Alice", "A1");
        network
            .as_user("users-org/alice", "rechargeAccount", &["Alice", "A1", "upg500"])
            .unwrap();

        let err = network
            .as_user("users-org/alice", "rechargeAccount", &["Alice", "A1", "upg999"])
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidArgument { .. }));
        assert_eq!(network.balance_of("Alice", "A1"), 500);
    }

    #[test]
    fn test_property_registration_gate() {
        let mut network = Network::new();

        // No account at all.
        let err = network
            .as_user(
                "users-org/ghost",
                "propertyRegistrationRequest",
                &["P1", "300", "Ghost", "G1"],
            )
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { .. }));

        // Requested but not yet approved.
        network
            .as_user(
                "users-org/carol",
                "requestNewUser",
                &["Carol", "carol@example.com", "555-0100", "C1"],
            )
            .unwrap();
        let err = network
            .as_user(
                "users-org/carol",
                "propertyRegistrationRequest",
                &["P1", "300", "Carol", "C1"],
            )
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidState { .. }));
    }

    #[test]
    fn test_non_owner_cannot_list_property() {
        let mut network = Network::new();
        network.onboard("Alice", "A1");
        network.onboard("Mallory", "M1");
        network
            .as_user(
                "users-org/alice",
                "propertyRegistrationRequest",
                &["P1", "300", "Alice", "A1"],
            )
            .unwrap();
        network
            .as_registrar("registrar-org/r1", "approvePropertyRegistration", &["P1"])
            .unwrap();

        let err = network
            .as_user(
                "users-org/mallory",
                "updateProperty",
                &["P1", "Mallory", "M1", "OnSale"],
            )
            .unwrap_err();
        assert!(matches!(err, RegistryError::Unauthorized { .. }));
        assert_eq!(network.property("P1")["status"], "Registered");
    }

    #[test]
    fn test_unlisted_property_cannot_be_bought() {
        let mut network = Network::new();
        network.onboard("Alice", "A1");
        network.onboard("Bob", "B1");
        network
            .as_user("users-org/bob", "rechargeAccount", &["Bob", "B1", "upg1000"])
            .unwrap();
        network
            .as_user(
                "users-org/alice",
                "propertyRegistrationRequest",
                &["P1", "300", "Alice", "A1"],
            )
            .unwrap();
        network
            .as_registrar("registrar-org/r1", "approvePropertyRegistration", &["P1"])
            .unwrap();

        let err = network
            .as_user("users-org/bob", "purchaseProperty", &["P1", "Bob", "B1"])
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidState { .. }));
        assert_eq!(network.balance_of("Bob", "B1"), 1000);

        let property = network.property("P1");
        let alice_key = regnet_core::UserAccount::account_key("Alice", "A1")
            .unwrap()
            .encode();
        assert_eq!(property["owner"], alice_key);
    }

    #[test]
    fn test_owner_cannot_buy_own_listing() {
        let mut network = Network::new();
        network.onboard("Alice", "A1");
        network
            .as_user("users-org/alice", "rechargeAccount", &["Alice", "A1", "upg500"])
            .unwrap();
        network
            .as_user(
                "users-org/alice",
                "propertyRegistrationRequest",
                &["P1", "300", "Alice", "A1"],
            )
            .unwrap();
        network
            .as_registrar("registrar-org/r1", "approvePropertyRegistration", &["P1"])
            .unwrap();
        network
            .as_user(
                "users-org/alice",
                "updateProperty",
                &["P1", "Alice", "A1", "OnSale"],
            )
            .unwrap();

        let err = network
            .as_user("users-org/alice", "purchaseProperty", &["P1", "Alice", "A1"])
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidArgument { .. }));
        assert_eq!(network.balance_of("Alice", "A1"), 500);
        assert_eq!(network.property("P1")["status"], "OnSale");
    }

    #[test]
    fn test_surfaces_reject_each_others_operations() {
        let mut network = Network::new();
        let err = network
            .as_registrar(
                "registrar-org/r1",
                "rechargeAccount",
                &["Alice", "A1", "upg100"],
            )
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidArgument { .. }));

        let err = network
            .as_user("users-org/alice", "approvePropertyRegistration", &["P1"])
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidArgument { .. }));
    }
}
