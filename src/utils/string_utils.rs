//! # 문자열 유틸리티
//!
//! 게시글 본문 처리와 관련된 공통 유틸리티 함수들입니다.

/// 가려야 하는 단어 목록 (소문자)
pub const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// 가려진 단어 대신 들어가는 문자열
pub const CENSOR_MASK: &str = "****";

/// 욕설 단어를 `****`로 치환
///
/// 본문을 단일 공백 기준으로 나누고, 소문자로 바꾼 단어가 목록과 정확히
/// 일치할 때만 치환합니다. 구두점이 붙은 단어(`kerfuffle!`)는 그대로 둡니다.
/// 공백 배치는 원문과 동일하게 유지됩니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::censor_profanity;
///
/// assert_eq!(censor_profanity("This is a Kerfuffle opinion"), "This is a **** opinion");
/// ```
pub fn censor_profanity(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            if PROFANE_WORDS.contains(&word.to_lowercase().as_str()) {
                CENSOR_MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_censors_listed_words_case_insensitively() {
        assert_eq!(
            censor_profanity("I had something interesting for breakfast kerfuffle"),
            "I had something interesting for breakfast ****"
        );
        assert_eq!(
            censor_profanity("SHARBERT and Fornax"),
            "**** and ****"
        );
    }

    #[test]
    fn test_leaves_punctuated_words_and_spacing() {
        assert_eq!(censor_profanity("Sharbert!"), "Sharbert!");
        assert_eq!(censor_profanity("a  fornax "), "a  **** ");
        assert_eq!(censor_profanity(""), "");
    }

    #[test]
    fn test_clean_text_is_untouched() {
        let body = "I'm the one who knocks!";
        assert_eq!(censor_profanity(body), body);
    }
}
