//! # Integration Test Flows
//!
//! The full lifecycle, driven exclusively through the contract surfaces the
//! platform would invoke: registration, approval, recharge, property
//! registration, listing, and purchase.

#[cfg(test)]
mod tests {
    use crate::harness::Network;
    use regnet_core::{RegistryError, UserAccount};

    #[test]
    fn test_full_market_scenario() {
        let mut network = Network::new();

        // Alice joins the network.
        network
            .as_user(
                "users-org/alice",
                "requestNewUser",
                &["Alice", "alice@example.com", "555-0100", "A1"],
            )
            .unwrap();
        let alice = network
            .as_registrar("registrar-org/r1", "approveNewUser", &["Alice", "A1"])
            .unwrap();
        assert_eq!(alice["status"], "Approved");
        assert_eq!(alice["balance"], 0);

        // Alice recharges.
        network
            .as_user("users-org/alice", "rechargeAccount", &["Alice", "A1", "upg500"])
            .unwrap();
        assert_eq!(network.balance_of("Alice", "A1"), 500);

        // Alice registers P1 at 300 and the registrar approves it.
        let property = network
            .as_user(
                "users-org/alice",
                "propertyRegistrationRequest",
                &["P1", "300", "Alice", "A1"],
            )
            .unwrap();
        let alice_key = UserAccount::account_key("Alice", "A1").unwrap().encode();
        assert_eq!(property["owner"], alice_key);
        assert_eq!(property["status"], "Requested");

        let property = network
            .as_registrar("registrar-org/r1", "approvePropertyRegistration", &["P1"])
            .unwrap();
        assert_eq!(property["status"], "Registered");

        // Bob joins with 100 coins.
        network.onboard("Bob", "B1");
        network
            .as_user("users-org/bob", "rechargeAccount", &["Bob", "B1", "upg100"])
            .unwrap();
        assert_eq!(network.balance_of("Bob", "B1"), 100);

        // Alice lists P1 for sale.
        let listed = network
            .as_user(
                "users-org/alice",
                "updateProperty",
                &["P1", "Alice", "A1", "OnSale"],
            )
            .unwrap();
        assert_eq!(listed["status"], "OnSale");

        // Bob cannot afford it yet; nothing changes.
        let err = network
            .as_user("users-org/bob", "purchaseProperty", &["P1", "Bob", "B1"])
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::InsufficientBalance {
                required: 300,
                available: 100,
            }
        ));
        assert_eq!(network.balance_of("Bob", "B1"), 100);
        assert_eq!(network.balance_of("Alice", "A1"), 500);
        assert_eq!(network.property("P1")["status"], "OnSale");

        // Two more recharges bring Bob to the asking price.
        network
            .as_user("users-org/bob", "rechargeAccount", &["Bob", "B1", "upg100"])
            .unwrap();
        network
            .as_user("users-org/bob", "rechargeAccount", &["Bob", "B1", "upg100"])
            .unwrap();
        assert_eq!(network.balance_of("Bob", "B1"), 300);

        // Bob buys P1.
        let outcome = network
            .as_user("users-org/bob", "purchaseProperty", &["P1", "Bob", "B1"])
            .unwrap();
        let bob_key = UserAccount::account_key("Bob", "B1").unwrap().encode();
        assert_eq!(outcome["property"]["owner"], bob_key);
        assert_eq!(outcome["property"]["status"], "Registered");
        assert_eq!(outcome["buyer"]["balance"], 0);
        assert_eq!(outcome["seller"]["balance"], 800);

        // The views agree with the returned outcome.
        assert_eq!(network.balance_of("Bob", "B1"), 0);
        assert_eq!(network.balance_of("Alice", "A1"), 800);
        let property = network.property("P1");
        assert_eq!(property["owner"], bob_key);
        assert_eq!(property["status"], "Registered");
    }

    #[test]
    fn test_purchase_conserves_total_coins() {
        let mut network = Network::new();
        network.onboard("Alice", "A1");
        network.onboard("Bob", "B1");

        for code in ["upg1000", "upg500"] {
            network
                .as_user("users-org/alice", "rechargeAccount", &["Alice", "A1", code])
                .unwrap();
        }
        network
            .as_user("users-org/bob", "rechargeAccount", &["Bob", "B1", "upg1000"])
            .unwrap();

        network
            .as_user(
                "users-org/alice",
                "propertyRegistrationRequest",
                &["P7", "725", "Alice", "A1"],
            )
            .unwrap();
        network
            .as_registrar("registrar-org/r1", "approvePropertyRegistration", &["P7"])
            .unwrap();
        network
            .as_user(
                "users-org/alice",
                "updateProperty",
                &["P7", "Alice", "A1", "OnSale"],
            )
            .unwrap();

        let total_before =
            network.balance_of("Alice", "A1") + network.balance_of("Bob", "B1");
        network
            .as_user("users-org/bob", "purchaseProperty", &["P7", "Bob", "B1"])
            .unwrap();
        let total_after = network.balance_of("Alice", "A1") + network.balance_of("Bob", "B1");

        assert_eq!(total_before, total_after);
        assert_eq!(network.balance_of("Bob", "B1"), 1000 - 725);
        assert_eq!(network.balance_of("Alice", "A1"), 1500 + 725);
    }

    #[test]
    fn test_property_can_be_resold_after_purchase() {
        let mut network = Network::new();
        network.onboard("Alice", "A1");
        network.onboard("Bob", "B1");

        network
            .as_user("users-org/bob", "rechargeAccount", &["Bob", "B1", "upg500"])
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
        network
            .as_user("users-org/bob", "purchaseProperty", &["P1", "Bob", "B1"])
            .unwrap();

        // Bob, now the owner, lists it again; Alice buys it back.
        network
            .as_user("users-org/bob", "updateProperty", &["P1", "Bob", "B1", "OnSale"])
            .unwrap();
        let outcome = network
            .as_user("users-org/alice", "purchaseProperty", &["P1", "Alice", "A1"])
            .unwrap();

        let alice_key = UserAccount::account_key("Alice", "A1").unwrap().encode();
        assert_eq!(outcome["property"]["owner"], alice_key);
        // Alice spent her 300 in proceeds buying the property back.
        assert_eq!(network.balance_of("Alice", "A1"), 0);
        assert_eq!(network.balance_of("Bob", "B1"), 500);
    }
}
