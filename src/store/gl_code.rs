//! General-ledger billing code rendering

const GL_CODE_PREFIX: &str = "170.3010";
const GL_CODE_SUFFIX: &str = "000.6340.623020.000.0000";

/// Render a region code into `170.3010.<region>.000.6340.623020.000.0000`
pub fn render_gl_code(region_code: &str) -> String {
    format!("{}.{}.{}", GL_CODE_PREFIX, region_code, GL_CODE_SUFFIX)
}
