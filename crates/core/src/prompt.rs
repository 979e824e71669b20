//! The fixed editorial instruction pair sent to the generation service.
//!
//! The persona and template are deliberately constant: the only variable
//! part of a generation request is the article text itself, and the low
//! temperature keeps rewrites tracking the source facts rather than
//! diverging stylistically.

/// System-level editorial persona instruction.
pub const SYSTEM_PROMPT: &str = "Sinä olet kokenut suomalainen toimittaja, joka kirjoittaa \
    kansallismielisestä ja taloudellisesti konservatiivisesta näkökulmasta. Uutiset on \
    kirjoitettava selkeästi, loogisesti ja asiapohjaisesti.";

/// Maximum tokens requested per rewrite.
pub const MAX_OUTPUT_TOKENS: i32 = 700;

/// Sampling temperature. Low so output stays literal.
pub const TEMPERATURE: f32 = 0.3;

/// Build the user-level instruction embedding the source text verbatim.
pub fn build_user_prompt(article_text: &str) -> String {
    format!(
        "Kirjoita tämä uutinen täysin uudelleen kansallismielisestä ja taloudellisesti \
         konservatiivisesta näkökulmasta.\n\
         - Älä kopioi alkuperäistä uutista, vaan muokkaa se uusiksi täysin uudella rakenteella.\n\
         - Korosta Suomen omavaraisuutta, taloudellista riippumattomuutta ja kansallista etua.\n\
         - Vältä monikulttuurisuuden ja globalisaation ylikorostamista.\n\
         - Käytä selkeää ja suoraa journalistista tyyliä.\n\
         - Perustele väitteet loogisesti faktoihin pohjautuen.\n\n\
         **Alkuperäinen uutinen:**\n{article_text}\n\n\
         **Uudelleenkirjoitettu uutinen:**"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_embeds_source_text_verbatim() {
        let text = "Suomen talous kasvoi 1,2 prosenttia.";
        let prompt = build_user_prompt(text);
        assert!(prompt.contains(text));
    }

    #[test]
    fn user_prompt_keeps_instructions_around_the_text() {
        let prompt = build_user_prompt("X");
        assert!(prompt.starts_with("Kirjoita tämä uutinen"));
        assert!(prompt.contains("**Alkuperäinen uutinen:**\nX"));
        assert!(prompt.ends_with("**Uudelleenkirjoitettu uutinen:**"));
    }

    #[test]
    fn sampling_parameters_are_fixed() {
        assert_eq!(MAX_OUTPUT_TOKENS, 700);
        assert!((TEMPERATURE - 0.3).abs() < f32::EPSILON);
    }
}
