//! CalledPartyBCDNumber wire scenarios and round-trip properties

use brivas_cap::{
    gsm7, tbcd, AddressField, AddressNature, CapError, NumberingPlan, ValidationError,
};
use proptest::prelude::*;

const NATURES: [AddressNature; 8] = [
    AddressNature::Unknown,
    AddressNature::InternationalNumber,
    AddressNature::NationalSignificantNumber,
    AddressNature::NetworkSpecificNumber,
    AddressNature::SubscriberNumber,
    AddressNature::Reserved,
    AddressNature::AbbreviatedNumber,
    AddressNature::ReservedForExtension,
];

const DIGIT_PLANS: [NumberingPlan; 10] = [
    NumberingPlan::Unknown,
    NumberingPlan::Isdn,
    NumberingPlan::Spare2,
    NumberingPlan::Data,
    NumberingPlan::Telex,
    NumberingPlan::LandMobile,
    NumberingPlan::Spare7,
    NumberingPlan::National,
    NumberingPlan::PrivatePlan,
    NumberingPlan::Reserved,
];

// Basic table minus ESC and CR, plus the extension characters
const GSM7_REPERTOIRE: &str = "@£$¥èéùìòÇ\nØøÅåΔ_ΦΓΛΩΠΨΣΘΞÆæßÉ !\"#¤%&'()*+,-./0123456789:;<=>?\
¡ABCDEFGHIJKLMNOPQRSTUVWXYZÄÖÑÜ§¿abcdefghijklmnopqrstuvwxyzäöñüà\x0c^{}\\[~]|€";

fn gsm7_text() -> impl Strategy<Value = String> {
    let chars: Vec<char> = GSM7_REPERTOIRE.chars().collect();
    prop::collection::vec(prop::sample::select(chars), 0..60)
        .prop_map(|v| v.into_iter().collect())
}

#[test]
fn international_isdn_number() {
    let field = AddressField::new(
        AddressNature::InternationalNumber,
        NumberingPlan::Isdn,
        "4471234567",
        false,
    )
    .unwrap();

    assert_eq!(field.as_bytes()[0], 0x11);
    assert_eq!(&field.as_bytes()[1..], &[0x44, 0x17, 0x32, 0x54, 0x76]);
    assert_eq!(field.address_nature(), Some(AddressNature::InternationalNumber));
    assert_eq!(field.numbering_plan(), Some(NumberingPlan::Isdn));
    assert_eq!(field.is_extension(), Some(false));
}

#[test]
fn odd_length_filler() {
    let field = AddressField::new(AddressNature::Unknown, NumberingPlan::Isdn, "123", false).unwrap();
    let body = &field.as_bytes()[1..];
    assert_eq!(body, &[0x21, 0xF3]);
    assert_eq!(body[1] >> 4, 0x0F);
    assert_eq!(tbcd::decode_digits(body, 3).unwrap(), "123");
    assert_eq!(field.address().as_deref(), Some("123"));
}

#[test]
fn alphanumeric_hi() {
    let field = AddressField::new(
        AddressNature::Unknown,
        NumberingPlan::ALPHANUMERIC,
        "HI",
        false,
    )
    .unwrap();
    let body = &field.as_bytes()[1..];
    assert!(body.len() <= 2);
    assert_eq!(gsm7::decode_gsm7(body).unwrap(), "HI");
    assert_eq!(field.address().as_deref(), Some("HI"));
}

#[test]
fn empty_field_accessors() {
    let field = AddressField::from_bytes(Vec::new());
    assert_eq!(field.address_nature(), None);
    assert_eq!(field.numbering_plan(), None);
    assert_eq!(field.is_extension(), None);
    assert_eq!(field.address(), None);
}

#[test]
fn unknown_plan_code_tolerated() {
    for plan_code in 10..15u8 {
        let field = AddressField::from_bytes(vec![0x10 | plan_code, 0x21, 0x43]);
        assert_eq!(field.numbering_plan(), None);
        assert_eq!(field.address_nature(), Some(AddressNature::InternationalNumber));
        // unknown plans fall back to the digit path
        assert_eq!(field.address().as_deref(), Some("1234"));
    }
}

#[test]
fn length_boundary() {
    let digits = "9".repeat(38);
    let field = AddressField::new(AddressNature::Unknown, NumberingPlan::Isdn, &digits, false).unwrap();
    assert_eq!(field.as_bytes().len(), 20);

    let digits = "9".repeat(39);
    let err = AddressField::new(AddressNature::Unknown, NumberingPlan::Isdn, &digits, false).unwrap_err();
    assert!(matches!(
        err,
        CapError::Validation(ValidationError::AddressTooLong { .. })
    ));
}

#[test]
fn parse_rejects_oversized_wire_field() {
    let data = vec![0x11; 42];
    assert!(AddressField::parse(&data).is_err());
    assert!(AddressField::parse(&data[..41]).is_ok());
}

#[test]
fn shared_across_threads() {
    let field = std::sync::Arc::new(
        AddressField::new(AddressNature::InternationalNumber, NumberingPlan::Isdn, "15550100", false)
            .unwrap(),
    );
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let field = field.clone();
            std::thread::spawn(move || field.address())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("15550100"));
    }
}

proptest! {
    #[test]
    fn digit_path_roundtrip(digits in "[0-9]{1,38}", plan in prop::sample::select(DIGIT_PLANS.to_vec())) {
        let field = AddressField::new(AddressNature::InternationalNumber, plan, &digits, false).unwrap();
        prop_assert_eq!(field.as_bytes().len(), 1 + (digits.len() + 1) / 2);
        let received = AddressField::from_bytes(field.to_bytes());
        prop_assert_eq!(received.address(), Some(digits));
    }

    #[test]
    fn alphanumeric_roundtrip(text in gsm7_text()) {
        let field = AddressField::new(AddressNature::Unknown, NumberingPlan::ALPHANUMERIC, &text, false).unwrap();
        let received = AddressField::from_bytes(field.to_bytes());
        prop_assert_eq!(received.address(), Some(text));
    }

    #[test]
    fn header_isolation(
        digits in "[0-9]{0,38}",
        nature in prop::sample::select(NATURES.to_vec()),
        plan in prop::sample::select(DIGIT_PLANS.to_vec()),
        extension in any::<bool>(),
    ) {
        let base = AddressField::new(AddressNature::Unknown, NumberingPlan::Isdn, &digits, false).unwrap();
        let field = AddressField::new(nature, plan, &digits, extension).unwrap();

        prop_assert_eq!(&field.as_bytes()[1..], &base.as_bytes()[1..]);
        prop_assert_eq!(field.address(), base.address());
        prop_assert_eq!(field.address_nature(), Some(nature));
        prop_assert_eq!(field.numbering_plan(), Some(plan));
        prop_assert_eq!(field.is_extension(), Some(extension));
    }

    #[test]
    fn accessors_never_panic(data in prop::collection::vec(any::<u8>(), 0..48)) {
        let field = AddressField::from_bytes(data.clone());
        let _ = field.address();
        let _ = field.to_string();
        prop_assert_eq!(field.is_extension(), data.first().map(|h| h & 0x80 != 0));
    }
}
