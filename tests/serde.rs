// Copyright Materialize, Inc. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository, or online at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde_json::json;
use serde_test::{assert_tokens, Token};

use xdec::Decimal;

#[test]
fn test_serde() {
    let d: Decimal = "-12.34".parse().unwrap();
    assert_tokens(&d, &[Token::Str("-12.340000000000000000")]);

    assert_tokens(&Decimal::ZERO, &[Token::Str("0.000000000000000000")]);

    let d: Decimal = "0.000000000000000001".parse().unwrap();
    assert_tokens(&d, &[Token::Str("0.000000000000000001")]);

    assert_tokens(
        &Decimal::INFINITY,
        &[Token::Str(
            "1000000000000000000000000000000000000.000000000000000000",
        )],
    );
}

#[test]
fn test_serde_json() {
    let d: Decimal = "123.456".parse().unwrap();
    let value = serde_json::to_value(d).unwrap();
    assert_eq!(value, json!("123.456000000000000000"));
    let back: Decimal = serde_json::from_value(value).unwrap();
    assert_eq!(back, d);

    // Deserialization accepts any text the parser accepts and
    // canonicalizes it.
    let d: Decimal = serde_json::from_value(json!("1.5e-7")).unwrap();
    assert_eq!(d.to_string(), "0.000000150000000000");

    let err = serde_json::from_value::<Decimal>(json!(1)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid type: integer `1`, expected a decimal number string"
    );

    let err = serde_json::from_value::<Decimal>(json!("12..34")).unwrap_err();
    assert!(err.to_string().contains("invalid decimal syntax"));
}
