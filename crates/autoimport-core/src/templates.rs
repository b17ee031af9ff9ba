//! Embedded fixed-text blocks consumed by the scanner and the glue renderer.

/// Ruby probe executed in the target interpreter to enumerate the constants a
/// package defines. Prints one `NAME,VALUE` CSV line per discovered constant,
/// where `VALUE` is the class of the constant's value.
pub const CONSTANTS_PROBE_RB: &str = r##"# frozen_string_literal: true

raise 'must provide a library base path' if ARGV[0].nil?
raise 'must provide a library to import' if ARGV[1].nil?

base = ARGV[0]
package = ARGV[1]

$LOAD_PATH.unshift(base)

before = Object.constants
require package
added = Object.constants - before

added.sort.each do |name|
  value = Object.const_get(name)
  puts "#{name},#{value.class}"
end
"##;

/// Header emitted at the top of every generated glue file.
pub const GLUE_HEADER: &str = "\
// This file is generated by autoimport. Do not edit.
//
// Registers the sources and constants of a Ruby package with the interpreter.
";
