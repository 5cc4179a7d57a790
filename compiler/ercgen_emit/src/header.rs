//! Document assembly.
//!
//! Concatenates the rendered sections. When the config asks for a header the
//! sections are placed between the base definitions every generated file
//! needs (result type, base packer) and the reserved extension codes, all
//! inside an include guard.

use ercgen_ir::erc;
use ercgen_ir::SealedModel;

use crate::emitter::{Emitter, StringEmitter};
use crate::naming::{PACK_FUNCTION, RESULT_TYPE};
use crate::sections::render_sections;
use crate::{EmitConfig, EmptyModelError};

/// Result type, status struct and success helpers.
const RESULT_TYPES: &str = "\
#include <stdbool.h> // _Bool
#include <stdint.h> // int32_t

/**
 * @brief Defines the type of an ADUC_Result.
 */
typedef int32_t ADUC_Result_t;

/**
 * @brief Defines an ADUC_Result object which is used to indicate status.
 */
typedef struct tagADUC_Result
{
    ADUC_Result_t ResultCode; /**< Method-specific result. Value > 0 indicates success. */
    ADUC_Result_t ExtendedResultCode; /**< Implementation-specific extended result code. */
} ADUC_Result;

/**
 * @brief Return value for general API calls.
 */
typedef enum tagADUC_GeneralResult
{
    ADUC_GeneralResult_Failure = 0, /**< Failed. */
    ADUC_GeneralResult_Success = 1, /**< Succeeded. */
} ADUC_GeneralResult;

/**
 * @brief Determines if a result code is succeeded.
 */
static inline _Bool IsAducResultCodeSuccess(const ADUC_Result_t resultCode)
{
    return (resultCode > 0);
}

/**
 * @brief Determines if a result code is failed.
 */
static inline _Bool IsAducResultCodeFailure(const ADUC_Result_t resultCode)
{
    return (resultCode <= 0);
}
";

/// Bit layout diagram placed above the base packer.
const LAYOUT_DIAGRAM: &str = "\
/**
 * Extended Result Code Structure (32 bits)
 *
 *    0 00 00000     Total 4 bytes (32 bits)
 *    - -- -----
 *    | |  |
 *    | |  +---------  Error code (20 bits)
 *    | |
 *    | +------------- Component/Area code (8 bits)
 *    |
 *    +--------------- Facility code (4 bits)
 */
";

/// Common extension result values shared by every facility/component pair.
const RESERVED_EXTENSION_CODES: [(&str, u32); 8] = [
    ("ADUC_ERC_EXTENSION_ERROR_NONE", 0),
    ("ADUC_ERC_EXTENSION_CREATE_FAILURE_INVALID_ARG", 1),
    ("ADUC_ERC_EXTENSION_CREATE_FAILURE_UNKNOWN", 2),
    ("ADUC_ERC_EXTENSION_CREATE_FAILURE_NOT_FOUND", 3),
    ("ADUC_ERC_EXTENSION_CREATE_FAILURE_VALIDATE", 4),
    ("ADUC_ERC_EXTENSION_CREATE_FAILURE_LOAD", 5),
    ("ADUC_ERC_EXTENSION_FAILURE_REQUIRED_FUNCTION_NOTIMPL", 6),
    ("ADUC_ERC_EXTENSION_CREATE_FAILURE_CREATE", 7),
];

/// Render the complete artifact text.
///
/// All sections are rendered before anything is assembled, so an empty
/// section fails the call without producing partial text.
#[tracing::instrument(level = "debug", skip_all, fields(header = config.wrap_in_header))]
pub fn render_document(model: &SealedModel, config: &EmitConfig) -> Result<String, EmptyModelError> {
    let sections = render_sections(model, config)?;
    let capacity = sections.iter().map(|(_, text)| text.len()).sum::<usize>() + 4096;
    let mut out = StringEmitter::with_capacity(config.indent, capacity);

    if !config.wrap_in_header {
        for (index, (_, text)) in sections.iter().enumerate() {
            if index > 0 {
                out.emit_blank_line();
            }
            out.emit(text);
        }
        return Ok(out.output());
    }

    emit_file_doc(&mut out, config);
    out.emit_line(&format!("#ifndef {}", config.include_guard));
    out.emit_line(&format!("#define {}", config.include_guard));
    out.emit_blank_line();
    out.emit(RESULT_TYPES);
    out.emit_blank_line();
    emit_base_packer(&mut out);
    out.emit_blank_line();

    for (section, text) in sections.iter() {
        emit_banner(&mut out, section.title());
        out.emit(text);
        out.emit_blank_line();
    }

    emit_banner(&mut out, "Reserved extension common error codes");
    for (index, (name, value)) in RESERVED_EXTENSION_CODES.iter().enumerate() {
        if index > 0 {
            out.emit_blank_line();
        }
        out.emit_line(&format!(
            "#define {name}(facility, component) {PACK_FUNCTION}(facility, component, {value})"
        ));
    }
    out.emit_blank_line();
    out.emit_line(&format!("#endif // {}", config.include_guard));
    out.ensure_trailing_newline();
    Ok(out.output())
}

fn emit_file_doc(out: &mut impl Emitter, config: &EmitConfig) {
    out.emit_line("/**");
    out.emit_line(&format!(" * @file {}", config.file_name));
    out.emit_line(" * @brief Describes the ADUC result type.");
    out.emit_line(" *");
    out.emit_line(" * Generated by ercgen. Do not edit; change the JSON specification instead.");
    out.emit_line(" */");
}

fn emit_base_packer(out: &mut impl Emitter) {
    out.emit(LAYOUT_DIAGRAM);
    out.emit_line(&format!("static inline {RESULT_TYPE}"));
    out.emit_line(&format!(
        "{PACK_FUNCTION}(const unsigned int facility, const unsigned int component, const unsigned int value)"
    ));
    out.emit_line("{");
    out.emit_indented_line(
        1,
        &format!(
            "return ((facility & {:#X}) << {:#X}) | ((component & {:#X}) << {:#X}) | (value & {:#X});",
            erc::FACILITY_MASK,
            erc::COMPONENT_BITS + erc::VALUE_BITS,
            erc::COMPONENT_MASK,
            erc::VALUE_BITS,
            erc::VALUE_MASK,
        ),
    );
    out.emit_line("}");
}

fn emit_banner(out: &mut impl Emitter, title: &str) {
    out.emit_line("//");
    out.emit_line(&format!("// {title}"));
    out.emit_line("//");
}
