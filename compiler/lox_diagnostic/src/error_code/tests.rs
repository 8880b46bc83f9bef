use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E6003.as_str(), "E6003");
}

#[test]
fn test_phase_predicates_partition_codes() {
    for code in ErrorCode::ALL {
        let phases = [
            code.is_lexer_error(),
            code.is_parser_error(),
            code.is_runtime_error(),
        ];
        assert_eq!(
            phases.iter().filter(|p| **p).count(),
            1,
            "{code} belongs to exactly one phase"
        );
    }
}

#[test]
fn test_phase_matches_leading_digit() {
    for code in ErrorCode::ALL {
        let digit = code.as_str().as_bytes()[1];
        match digit {
            b'0' => assert!(code.is_lexer_error()),
            b'1' => assert!(code.is_parser_error()),
            b'6' => assert!(code.is_runtime_error()),
            _ => panic!("unexpected phase digit in {code}"),
        }
    }
}

#[test]
fn test_from_str() {
    assert_eq!("E0002".parse::<ErrorCode>(), Ok(ErrorCode::E0002));
    assert_eq!("e1004".parse::<ErrorCode>(), Ok(ErrorCode::E1004));
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
    assert_eq!("".parse::<ErrorCode>(), Err(()));
}

#[test]
fn test_descriptions_nonempty() {
    for code in ErrorCode::ALL {
        assert!(!code.description().is_empty());
    }
}
