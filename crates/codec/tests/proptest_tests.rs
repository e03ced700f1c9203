//! Property-based tests for transaction and account-key encoding.

use flow_tx_codec::{encode_account_key, encode_envelope, encode_payload, rlp};
use flow_tx_types::{
    AccountKey, Address, EncodedArgument, Identifier, PayloadSignature, ProposalKey, TokenAmount,
    Transaction,
};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating random transaction data
// ============================================================================

fn arb_address() -> impl Strategy<Value = Address> {
    prop::array::uniform8(any::<u8>()).prop_map(Address::from)
}

fn arb_identifier() -> impl Strategy<Value = Identifier> {
    prop::array::uniform32(any::<u8>()).prop_map(Identifier::from)
}

fn arb_bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..max_len)
}

fn arb_signature() -> impl Strategy<Value = PayloadSignature> {
    (arb_address(), any::<u64>(), arb_bytes(80)).prop_map(|(address, key_id, signature)| {
        PayloadSignature {
            address,
            key_id,
            signature,
        }
    })
}

fn arb_transaction() -> impl Strategy<Value = Transaction> {
    (
        ".{0,300}",                                   // script
        prop::collection::vec(arb_bytes(120), 0..4),  // arguments
        arb_identifier(),                             // reference block
        any::<u64>(),                                 // gas_limit
        (arb_address(), any::<u64>(), any::<u64>()),  // proposal key
        arb_address(),                                // payer
        prop::collection::vec(arb_address(), 0..4),   // authorizers
        prop::collection::vec(arb_signature(), 0..4), // signatures
    )
        .prop_map(
            |(script, arguments, reference_block_id, gas_limit, pk, payer, authorizers, sigs)| {
                Transaction {
                    script,
                    arguments: arguments.into_iter().map(EncodedArgument::from_raw).collect(),
                    reference_block_id,
                    gas_limit,
                    proposal_key: ProposalKey {
                        address: pk.0,
                        key_id: pk.1,
                        sequence_number: pk.2,
                    },
                    payer,
                    authorizers,
                    payload_signatures: sigs,
                }
            },
        )
}

/// Length of the RLP list header at the start of `bytes`.
fn list_header_len(bytes: &[u8]) -> usize {
    match bytes[0] {
        0xc0..=0xf7 => 1,
        b => 1 + (b - 0xf7) as usize,
    }
}

/// `[[address, key_id, signature]...]` rebuilt from the primitive encoder.
fn expected_signature_list(signatures: &[PayloadSignature]) -> Vec<u8> {
    let entries: Vec<Vec<u8>> = signatures
        .iter()
        .map(|sig| {
            rlp::encode_list(&[
                rlp::encode_bytes(sig.address.as_bytes()).unwrap(),
                rlp::encode_uint(sig.key_id).unwrap(),
                rlp::encode_bytes(&sig.signature).unwrap(),
            ])
            .unwrap()
        })
        .collect();
    rlp::encode_list(&entries).unwrap()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn payload_encoding_is_deterministic(tx in arb_transaction()) {
        let a = encode_payload(&tx).unwrap();
        let b = encode_payload(&tx.clone()).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn envelope_contains_payload(tx in arb_transaction()) {
        let payload = encode_payload(&tx).unwrap();
        let envelope = encode_envelope(&tx).unwrap();

        let body = envelope.body();
        let inner = &body[list_header_len(body)..];
        let expected = [
            payload.body().to_vec(),
            expected_signature_list(&tx.payload_signatures),
        ]
        .concat();
        prop_assert_eq!(inner, expected.as_slice());
        prop_assert_ne!(payload.domain_tag(), envelope.domain_tag());
    }

    #[test]
    fn payload_does_not_depend_on_signatures(
        tx in arb_transaction(),
        extra in prop::collection::vec(arb_signature(), 1..3),
    ) {
        let mut signed = tx.clone();
        signed.payload_signatures.extend(extra);
        prop_assert_eq!(encode_payload(&tx).unwrap(), encode_payload(&signed).unwrap());
        prop_assert_ne!(encode_envelope(&tx).unwrap(), encode_envelope(&signed).unwrap());
    }

    #[test]
    fn gas_limit_changes_payload(tx in arb_transaction(), delta in 1u64..1000) {
        let mut other = tx.clone();
        other.gas_limit = tx.gas_limit.wrapping_add(delta);
        prop_assert_ne!(encode_payload(&tx).unwrap(), encode_payload(&other).unwrap());
    }

    #[test]
    fn uint_encoding_is_minimal(v in any::<u64>()) {
        let encoded = rlp::encode_uint(v).unwrap();
        if v == 0 {
            prop_assert_eq!(encoded, vec![0x80]);
        } else if v < 0x80 {
            prop_assert_eq!(encoded, vec![v as u8]);
        } else {
            let len = (encoded[0] - 0x80) as usize;
            prop_assert_eq!(len, encoded.len() - 1);
            prop_assert_ne!(encoded[1], 0);
        }
    }

    #[test]
    fn distinct_account_keys_encode_distinctly(
        public_key in arb_bytes(70),
        a in (any::<u8>(), any::<u8>(), any::<u16>()),
        b in (any::<u8>(), any::<u8>(), any::<u16>()),
    ) {
        let key = |(sign_algorithm, hash_algorithm, weight): (u8, u8, u16)| AccountKey {
            public_key: public_key.clone(),
            sign_algorithm,
            hash_algorithm,
            weight,
        };
        let ea = encode_account_key(&key(a)).unwrap();
        let eb = encode_account_key(&key(b)).unwrap();
        prop_assert_eq!(a == b, ea == eb);
    }

    #[test]
    fn amount_text_is_canonical(units in any::<u64>()) {
        let amount = TokenAmount::from_units(units as u128);
        let reparsed: TokenAmount = amount.to_string().parse().unwrap();
        prop_assert_eq!(reparsed, amount);
        prop_assert_eq!(reparsed.to_string(), amount.to_string());
    }
}
