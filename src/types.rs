//! Native OpenGL scalar and handle types.
//!
//! These mirror the C typedefs bit for bit. Pointer-sized types follow the
//! target's pointer width rather than a fixed width.

#![allow(non_camel_case_types)]

use std::os::raw::{c_char, c_double, c_float, c_int, c_short, c_uchar, c_uint, c_ushort, c_void};

pub type GLenum = c_uint;
pub type GLboolean = c_uchar;
pub type GLbitfield = c_uint;
pub type GLvoid = c_void;
pub type GLchar = c_char;
pub type GLbyte = i8;
pub type GLshort = c_short;
pub type GLint = c_int;
pub type GLubyte = c_uchar;
pub type GLushort = c_ushort;
pub type GLuint = c_uint;
pub type GLsizei = c_int;
pub type GLfloat = c_float;
pub type GLclampf = c_float;
pub type GLdouble = c_double;
pub type GLclampd = c_double;
pub type GLint64 = i64;
pub type GLuint64 = u64;
pub type GLintptr = isize;
pub type GLsizeiptr = isize;

pub enum __GLsync {}
pub type GLsync = *const __GLsync;

pub const GL_FALSE: GLboolean = 0;
pub const GL_TRUE: GLboolean = 1;
pub const GL_NO_ERROR: GLenum = 0;
