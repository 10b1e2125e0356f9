/// 正の数値を表す Newtype を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`f64` をラップ）
/// - `new()`: 有限かつ 0 より大きいことを検証
/// - `as_f64()`: 内部値を取得
/// - `Display` impl
///
/// 管理アクションで設定される数値（チケット価格、最大チケット数、
/// ラウンド期間）はいずれも「正の数値であること」のみが要求されるため、
/// 検証ロジックを共有する。
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use chainraffle_domain::raffle::TicketPrice;
///
/// let price = TicketPrice::new(0.001)?;
/// assert_eq!(price.as_f64(), 0.001);
///
/// assert!(TicketPrice::new(0.0).is_err());
/// assert!(TicketPrice::new(-1.0).is_err());
/// # Ok(())
/// # }
/// ```
macro_rules! define_positive_number {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
        $vis struct $Name(f64);

        impl $Name {
            /// 指定した値から作成する
            ///
            /// # バリデーション
            ///
            /// - 有限な数値であること（NaN / Infinity は無効）
            /// - 0 より大きいこと
            ///
            /// # エラー
            ///
            /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
            pub fn new(value: f64) -> Result<Self, $crate::DomainError> {
                if !value.is_finite() || value <= 0.0 {
                    return Err($crate::DomainError::Validation(format!(
                        "{}は正の数値である必要があります",
                        $label
                    )));
                }
                Ok(Self(value))
            }

            /// 内部の f64 値を取得する
            pub fn as_f64(&self) -> f64 {
                self.0
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// バリデーション付き String Newtype を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`String` をラップ）
/// - `new()`: trim + 空チェック + 最大長チェック
/// - `as_str()`: 文字列参照
/// - `into_string()`: 所有権を持つ文字列に変換
/// - `Display` impl
///
/// # 引数
///
/// - `$label`: エラーメッセージに使うラベル（例: `"トランザクションハッシュ"`）
/// - `$max_length`: 最大文字数（`chars().count()` でカウント）
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use chainraffle_domain::ticket::NetworkName;
///
/// let network = NetworkName::new("sepolia")?;
/// assert_eq!(network.as_str(), "sepolia");
///
/// assert!(NetworkName::new("   ").is_err());
/// # Ok(())
/// # }
/// ```
macro_rules! define_validated_string {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr,
            max_length: $max_length:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        $vis struct $Name(String);

        impl $Name {
            /// 指定した値から作成する
            ///
            /// # バリデーション
            ///
            /// - trim 後に空文字列ではないこと
            /// - 最大 `max_length` 文字以内であること
            ///
            /// # エラー
            ///
            /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
                let value = value.into().trim().to_string();

                if value.is_empty() {
                    return Err($crate::DomainError::Validation(format!(
                        "{}は必須です",
                        $label
                    )));
                }

                if value.chars().count() > $max_length {
                    return Err($crate::DomainError::Validation(format!(
                        "{}は {} 文字以内である必要があります",
                        $label, $max_length
                    )));
                }

                Ok(Self(value))
            }

            /// 文字列参照を取得する
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// 所有権を持つ文字列に変換する
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
