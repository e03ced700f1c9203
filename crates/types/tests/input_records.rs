use flow_tx_types::{
    AccountKey, AccountKeyInput, Address, EncodingError, Error, Transaction, TransactionInput,
};
use pretty_assertions::assert_eq;

const ADDRESS: &str = "f8d6e0586b0a20c7";
const REF_BLOCK: &str = "f0e4c2f76c58916ec258f246851bea091d14d4247a2fc3e18694461b1816e13b";

fn fixture_json() -> serde_json::Value {
    serde_json::json!({
        "script": "transaction { execute { log(\"hi\") } }",
        "arguments": [
            { "type": "String", "value": "c882123402038203e8" },
            { "type": "UFix64", "value": "0.00000001" }
        ],
        "refBlock": REF_BLOCK,
        "gasLimit": 42,
        "proposalKey": { "address": ADDRESS, "keyId": 4, "sequenceNum": 10 },
        "payer": ADDRESS,
        "authorizers": [ADDRESS],
        "payloadSigs": [
            { "address": ADDRESS, "keyId": 4, "sig": "f7225388" }
        ]
    })
}

fn build(value: serde_json::Value) -> Result<Transaction, Error> {
    let input = TransactionInput::from_json(&value.to_string())?;
    Transaction::try_from(input)
}

fn without(field: &str) -> serde_json::Value {
    let mut value = fixture_json();
    value
        .as_object_mut()
        .unwrap()
        .remove(field)
        .unwrap_or_else(|| panic!("fixture has no {field}"));
    value
}

#[test]
fn fixture_record_converts() {
    let tx = build(fixture_json()).unwrap();
    let address: Address = ADDRESS.parse().unwrap();

    assert_eq!(tx.arguments.len(), 2);
    assert_eq!(
        tx.arguments[1].as_bytes(),
        br#"{"type":"UFix64","value":"0.00000001"}"#
    );
    assert_eq!(tx.reference_block_id.to_hex(), REF_BLOCK);
    assert_eq!(tx.gas_limit, 42);
    assert_eq!(tx.proposal_key.address, address);
    assert_eq!(tx.proposal_key.key_id, 4);
    assert_eq!(tx.proposal_key.sequence_number, 10);
    assert_eq!(tx.payer, address);
    assert_eq!(tx.authorizers, vec![address]);
    assert_eq!(tx.payload_signatures.len(), 1);
    assert_eq!(tx.payload_signatures[0].signature, vec![0xf7, 0x22, 0x53, 0x88]);
}

#[test]
fn long_field_names_are_accepted() {
    let value = serde_json::json!({
        "script": "",
        "arguments": [],
        "referenceBlockId": "0x01",
        "gasLimit": 0,
        "proposalKey": { "address": "0x01", "keyId": 0, "sequenceNumber": 0 },
        "payer": "0x01",
        "authorizers": [],
        "payloadSignatures": []
    });
    let tx = build(value).unwrap();
    assert_eq!(tx.reference_block_id.as_bytes()[31], 0x01);
    assert_eq!(tx.payer.as_bytes(), &[0, 0, 0, 0, 0, 0, 0, 0x01]);
}

#[test]
fn payload_signatures_default_to_empty() {
    let tx = build(without("payloadSigs")).unwrap();
    assert!(tx.payload_signatures.is_empty());
}

#[test]
fn each_required_field_is_reported() {
    let cases = [
        ("script", "script"),
        ("arguments", "arguments"),
        ("refBlock", "referenceBlockId"),
        ("gasLimit", "gasLimit"),
        ("proposalKey", "proposalKey"),
        ("payer", "payer"),
        ("authorizers", "authorizers"),
    ];
    for (removed, reported) in cases {
        assert_eq!(
            build(without(removed)).unwrap_err(),
            Error::MissingField(reported),
            "removing {removed}"
        );
    }
}

#[test]
fn nested_missing_fields_are_qualified() {
    let mut value = fixture_json();
    value["proposalKey"]
        .as_object_mut()
        .unwrap()
        .remove("sequenceNum");
    assert_eq!(
        build(value).unwrap_err(),
        Error::MissingField("proposalKey.sequenceNumber")
    );

    let mut value = fixture_json();
    value["payloadSigs"][0].as_object_mut().unwrap().remove("sig");
    assert_eq!(
        build(value).unwrap_err(),
        Error::MissingField("payloadSignatures.signature")
    );
}

#[test]
fn negative_key_id_is_rejected() {
    let mut value = fixture_json();
    value["proposalKey"]["keyId"] = serde_json::json!(-1);
    assert_eq!(
        build(value).unwrap_err(),
        Error::Encoding(EncodingError::NegativeInteger {
            field: "proposalKey.keyId"
        })
    );
}

#[test]
fn fractional_gas_limit_is_rejected() {
    let mut value = fixture_json();
    value["gasLimit"] = serde_json::json!(1.5);
    assert_eq!(
        build(value).unwrap_err(),
        Error::Encoding(EncodingError::NotAnInteger { field: "gasLimit" })
    );
}

#[test]
fn oversized_address_is_rejected() {
    let mut value = fixture_json();
    value["authorizers"] = serde_json::json!(["0x0102030405060708090a"]);
    assert!(matches!(
        build(value).unwrap_err(),
        Error::MalformedAddress { .. }
    ));
}

#[test]
fn malformed_signature_hex_is_rejected() {
    let mut value = fixture_json();
    value["payloadSigs"][0]["sig"] = serde_json::json!("zz");
    assert!(matches!(
        build(value).unwrap_err(),
        Error::MalformedHex {
            field: "payloadSignatures.signature",
            ..
        }
    ));
}

#[test]
fn invalid_json_is_reported() {
    assert!(matches!(
        TransactionInput::from_json("{").unwrap_err(),
        Error::Json(_)
    ));
}

#[test]
fn account_key_record_converts() {
    let input: AccountKeyInput = serde_json::from_value(serde_json::json!({
        "publicKey": "0x1234",
        "signAlgorithm": 2,
        "hashAlgorithm": 3,
        "weight": 1000
    }))
    .unwrap();
    let key = AccountKey::try_from(input).unwrap();
    assert_eq!(
        key,
        AccountKey {
            public_key: vec![0x12, 0x34],
            sign_algorithm: 2,
            hash_algorithm: 3,
            weight: 1000,
        }
    );
}

#[test]
fn account_key_weight_wider_than_16_bits_is_rejected() {
    let input = AccountKeyInput {
        public_key: Some("1234".into()),
        sign_algorithm: Some(2u8.into()),
        hash_algorithm: Some(3u8.into()),
        weight: Some(70_000u32.into()),
    };
    assert_eq!(
        AccountKey::try_from(input).unwrap_err(),
        Error::Encoding(EncodingError::IntegerOutOfRange {
            field: "weight",
            bits: 16
        })
    );
}

#[test]
fn argument_text_reaches_the_transaction_unchanged() {
    let mut value = fixture_json();
    value["arguments"] = serde_json::json!([
        { "type": "UFix64", "value": "1.00000000" },
        { "type": "Address", "value": ADDRESS },
        { "type": "Address", "value": "0xF8D6E0586B0A20C7" },
        { "type": "UInt8", "value": "007" }
    ]);
    let tx = build(value).unwrap();

    let expected: [&[u8]; 4] = [
        br#"{"type":"UFix64","value":"1.00000000"}"#,
        br#"{"type":"Address","value":"f8d6e0586b0a20c7"}"#,
        br#"{"type":"Address","value":"0xF8D6E0586B0A20C7"}"#,
        br#"{"type":"UInt8","value":"007"}"#,
    ];
    for (argument, expected) in tx.arguments.iter().zip(expected) {
        assert_eq!(argument.as_bytes(), expected);
    }
}

#[test]
fn malformed_arguments_are_rejected() {
    for bad in [
        serde_json::json!({ "type": "UFix64", "value": "1.123456789" }),
        serde_json::json!({ "type": "UInt8", "value": "256" }),
        serde_json::json!({ "type": "Int128", "value": "1" }),
    ] {
        let mut value = fixture_json();
        value["arguments"] = serde_json::json!([bad]);
        assert!(
            matches!(build(value).unwrap_err(), Error::Argument(_)),
            "accepted {bad}"
        );
    }
}
