use td::error::{exit_codes, Error};

#[test]
fn exit_code_user_error() {
    let err = Error::InvalidArgument("bad input".to_string());
    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
}

#[test]
fn exit_code_no_data_dir() {
    assert_eq!(Error::NoDataDir.exit_code(), exit_codes::USER_ERROR);
}

#[test]
fn exit_code_validation_rejected() {
    let err = Error::Validation("This todo already exists".to_string());
    assert_eq!(err.exit_code(), exit_codes::VALIDATION_REJECTED);
}

#[test]
fn exit_code_operation_failed() {
    let err = Error::OperationFailed("boom".to_string());
    assert_eq!(err.exit_code(), exit_codes::OPERATION_FAILED);
}

#[test]
fn validation_error_displays_bare_message() {
    let err = Error::Validation("The text has special characters.".to_string());
    assert_eq!(err.to_string(), "The text has special characters.");
}
