//! The OpenGL 3.3 core entry-point catalogue.
//!
//! Each line below declares one entry point: whether the profile requires it,
//! its slot name, the standard name handed to the resolver, the exported C
//! trampoline symbol, and the exact native signature. Everything else in the
//! dispatch layer (slot indices, the Rust trampolines on [`FunctionTable`],
//! the C ABI trampolines in [`exports`]) is generated from this list.
//!
//! `optional` marks the legacy fixed-function packed-attribute calls
//! (`gl*P*ui[v]` other than `glVertexAttribP*`) and `glIndexub[v]`. Core
//! profile drivers commonly leave them out, so their absence does not fail
//! resolution.

use std::ffi::CStr;
use std::fmt;
use std::mem;

use crate::error::Error;
use crate::ffi;
use crate::table::FunctionTable;
use crate::types::*;

/// Whether a missing entry point makes the table unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// Mandatory for the profile; a null address fails resolution.
    Core,
    /// Gated behind an optional extension; a null address leaves the slot empty.
    Optional,
}

const fn nul_terminated(name: &'static str) -> &'static CStr {
    match CStr::from_bytes_with_nul(name.as_bytes()) {
        Ok(name) => name,
        Err(_) => panic!("entry point name must end with a single NUL"),
    }
}

impl EntryPoint {
    /// Dense slot index, `EntryPoint::ALL[e.index()] == e`.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_name(name: &str) -> Option<EntryPoint> {
        EntryPoint::ALL
            .iter()
            .copied()
            .find(|entry| entry.name() == name)
    }

    pub fn is_optional(self) -> bool {
        self.requirement() == Requirement::Optional
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

entry_points! {
    core Viewport = glViewport / gl3_3core_glViewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    core DepthRange = glDepthRange / gl3_3core_glDepthRange(near_val: GLdouble, far_val: GLdouble);
    core IsEnabled = glIsEnabled / gl3_3core_glIsEnabled(cap: GLenum) -> GLboolean;
    core GetTexLevelParameteriv = glGetTexLevelParameteriv / gl3_3core_glGetTexLevelParameteriv(target: GLenum, level: GLint, pname: GLenum, params: *mut GLint);
    core GetTexLevelParameterfv = glGetTexLevelParameterfv / gl3_3core_glGetTexLevelParameterfv(target: GLenum, level: GLint, pname: GLenum, params: *mut GLfloat);
    core GetTexParameteriv = glGetTexParameteriv / gl3_3core_glGetTexParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
    core GetTexParameterfv = glGetTexParameterfv / gl3_3core_glGetTexParameterfv(target: GLenum, pname: GLenum, params: *mut GLfloat);
    core GetTexImage = glGetTexImage / gl3_3core_glGetTexImage(target: GLenum, level: GLint, format: GLenum, gltype: GLenum, pixels: *mut GLvoid);
    core GetIntegerv = glGetIntegerv / gl3_3core_glGetIntegerv(pname: GLenum, params: *mut GLint);
    core GetFloatv = glGetFloatv / gl3_3core_glGetFloatv(pname: GLenum, params: *mut GLfloat);
    core GetError = glGetError / gl3_3core_glGetError() -> GLenum;
    core GetDoublev = glGetDoublev / gl3_3core_glGetDoublev(pname: GLenum, params: *mut GLdouble);
    core GetBooleanv = glGetBooleanv / gl3_3core_glGetBooleanv(pname: GLenum, params: *mut GLboolean);
    core ReadPixels = glReadPixels / gl3_3core_glReadPixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, gltype: GLenum, pixels: *mut GLvoid);
    core ReadBuffer = glReadBuffer / gl3_3core_glReadBuffer(mode: GLenum);
    core PixelStorei = glPixelStorei / gl3_3core_glPixelStorei(pname: GLenum, param: GLint);
    core PixelStoref = glPixelStoref / gl3_3core_glPixelStoref(pname: GLenum, param: GLfloat);
    core DepthFunc = glDepthFunc / gl3_3core_glDepthFunc(func: GLenum);
    core StencilOp = glStencilOp / gl3_3core_glStencilOp(fail: GLenum, zfail: GLenum, zpass: GLenum);
    core StencilFunc = glStencilFunc / gl3_3core_glStencilFunc(func: GLenum, reference: GLint, mask: GLuint);
    core LogicOp = glLogicOp / gl3_3core_glLogicOp(opcode: GLenum);
    core BlendFunc = glBlendFunc / gl3_3core_glBlendFunc(sfactor: GLenum, dfactor: GLenum);
    core Flush = glFlush / gl3_3core_glFlush();
    core Finish = glFinish / gl3_3core_glFinish();
    core Enable = glEnable / gl3_3core_glEnable(cap: GLenum);
    core Disable = glDisable / gl3_3core_glDisable(cap: GLenum);
    core DepthMask = glDepthMask / gl3_3core_glDepthMask(flag: GLboolean);
    core ColorMask = glColorMask / gl3_3core_glColorMask(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean);
    core StencilMask = glStencilMask / gl3_3core_glStencilMask(mask: GLuint);
    core ClearDepth = glClearDepth / gl3_3core_glClearDepth(depth: GLdouble);
    core ClearStencil = glClearStencil / gl3_3core_glClearStencil(s: GLint);
    core ClearColor = glClearColor / gl3_3core_glClearColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    core Clear = glClear / gl3_3core_glClear(mask: GLbitfield);
    core DrawBuffer = glDrawBuffer / gl3_3core_glDrawBuffer(mode: GLenum);
    core TexImage2D = glTexImage2D / gl3_3core_glTexImage2D(target: GLenum, level: GLint, internal_format: GLint, width: GLsizei, height: GLsizei, border: GLint, format: GLenum, gltype: GLenum, pixels: *const GLvoid);
    core TexImage1D = glTexImage1D / gl3_3core_glTexImage1D(target: GLenum, level: GLint, internal_format: GLint, width: GLsizei, border: GLint, format: GLenum, gltype: GLenum, pixels: *const GLvoid);
    core TexParameteriv = glTexParameteriv / gl3_3core_glTexParameteriv(target: GLenum, pname: GLenum, params: *const GLint);
    core TexParameteri = glTexParameteri / gl3_3core_glTexParameteri(target: GLenum, pname: GLenum, param: GLint);
    core TexParameterfv = glTexParameterfv / gl3_3core_glTexParameterfv(target: GLenum, pname: GLenum, params: *const GLfloat);
    core TexParameterf = glTexParameterf / gl3_3core_glTexParameterf(target: GLenum, pname: GLenum, param: GLfloat);
    core Scissor = glScissor / gl3_3core_glScissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    core PolygonMode = glPolygonMode / gl3_3core_glPolygonMode(face: GLenum, mode: GLenum);
    core PointSize = glPointSize / gl3_3core_glPointSize(size: GLfloat);
    core LineWidth = glLineWidth / gl3_3core_glLineWidth(width: GLfloat);
    core Hint = glHint / gl3_3core_glHint(target: GLenum, mode: GLenum);
    core FrontFace = glFrontFace / gl3_3core_glFrontFace(mode: GLenum);
    core CullFace = glCullFace / gl3_3core_glCullFace(mode: GLenum);
    optional Indexubv = glIndexubv / gl3_3core_glIndexubv(c: *const GLubyte);
    optional Indexub = glIndexub / gl3_3core_glIndexub(c: GLubyte);
    core IsTexture = glIsTexture / gl3_3core_glIsTexture(texture: GLuint) -> GLboolean;
    core GenTextures = glGenTextures / gl3_3core_glGenTextures(n: GLsizei, textures: *mut GLuint);
    core DeleteTextures = glDeleteTextures / gl3_3core_glDeleteTextures(n: GLsizei, textures: *const GLuint);
    core BindTexture = glBindTexture / gl3_3core_glBindTexture(target: GLenum, texture: GLuint);
    core TexSubImage2D = glTexSubImage2D / gl3_3core_glTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, gltype: GLenum, pixels: *const GLvoid);
    core TexSubImage1D = glTexSubImage1D / gl3_3core_glTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, gltype: GLenum, pixels: *const GLvoid);
    core CopyTexSubImage2D = glCopyTexSubImage2D / gl3_3core_glCopyTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    core CopyTexSubImage1D = glCopyTexSubImage1D / gl3_3core_glCopyTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, x: GLint, y: GLint, width: GLsizei);
    core CopyTexImage2D = glCopyTexImage2D / gl3_3core_glCopyTexImage2D(target: GLenum, level: GLint, internal_format: GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei, border: GLint);
    core CopyTexImage1D = glCopyTexImage1D / gl3_3core_glCopyTexImage1D(target: GLenum, level: GLint, internal_format: GLenum, x: GLint, y: GLint, width: GLsizei, border: GLint);
    core PolygonOffset = glPolygonOffset / gl3_3core_glPolygonOffset(factor: GLfloat, units: GLfloat);
    core DrawElements = glDrawElements / gl3_3core_glDrawElements(mode: GLenum, count: GLsizei, gltype: GLenum, indices: *const GLvoid);
    core DrawArrays = glDrawArrays / gl3_3core_glDrawArrays(mode: GLenum, first: GLint, count: GLsizei);
    core CopyTexSubImage3D = glCopyTexSubImage3D / gl3_3core_glCopyTexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    core TexSubImage3D = glTexSubImage3D / gl3_3core_glTexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, gltype: GLenum, pixels: *const GLvoid);
    core TexImage3D = glTexImage3D / gl3_3core_glTexImage3D(target: GLenum, level: GLint, internal_format: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, format: GLenum, gltype: GLenum, pixels: *const GLvoid);
    core DrawRangeElements = glDrawRangeElements / gl3_3core_glDrawRangeElements(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei, gltype: GLenum, indices: *const GLvoid);
    core BlendEquation = glBlendEquation / gl3_3core_glBlendEquation(mode: GLenum);
    core BlendColor = glBlendColor / gl3_3core_glBlendColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    core GetCompressedTexImage = glGetCompressedTexImage / gl3_3core_glGetCompressedTexImage(target: GLenum, level: GLint, img: *mut GLvoid);
    core CompressedTexSubImage1D = glCompressedTexSubImage1D / gl3_3core_glCompressedTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, image_size: GLsizei, data: *const GLvoid);
    core CompressedTexSubImage2D = glCompressedTexSubImage2D / gl3_3core_glCompressedTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, image_size: GLsizei, data: *const GLvoid);
    core CompressedTexSubImage3D = glCompressedTexSubImage3D / gl3_3core_glCompressedTexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, image_size: GLsizei, data: *const GLvoid);
    core CompressedTexImage1D = glCompressedTexImage1D / gl3_3core_glCompressedTexImage1D(target: GLenum, level: GLint, internal_format: GLenum, width: GLsizei, border: GLint, image_size: GLsizei, data: *const GLvoid);
    core CompressedTexImage2D = glCompressedTexImage2D / gl3_3core_glCompressedTexImage2D(target: GLenum, level: GLint, internal_format: GLenum, width: GLsizei, height: GLsizei, border: GLint, image_size: GLsizei, data: *const GLvoid);
    core CompressedTexImage3D = glCompressedTexImage3D / gl3_3core_glCompressedTexImage3D(target: GLenum, level: GLint, internal_format: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, image_size: GLsizei, data: *const GLvoid);
    core SampleCoverage = glSampleCoverage / gl3_3core_glSampleCoverage(value: GLfloat, invert: GLboolean);
    core ActiveTexture = glActiveTexture / gl3_3core_glActiveTexture(texture: GLenum);
    core PointParameteriv = glPointParameteriv / gl3_3core_glPointParameteriv(pname: GLenum, params: *const GLint);
    core PointParameteri = glPointParameteri / gl3_3core_glPointParameteri(pname: GLenum, param: GLint);
    core PointParameterfv = glPointParameterfv / gl3_3core_glPointParameterfv(pname: GLenum, params: *const GLfloat);
    core PointParameterf = glPointParameterf / gl3_3core_glPointParameterf(pname: GLenum, param: GLfloat);
    core MultiDrawArrays = glMultiDrawArrays / gl3_3core_glMultiDrawArrays(mode: GLenum, first: *const GLint, count: *const GLsizei, drawcount: GLsizei);
    core BlendFuncSeparate = glBlendFuncSeparate / gl3_3core_glBlendFuncSeparate(sfactor_rgb: GLenum, dfactor_rgb: GLenum, sfactor_alpha: GLenum, dfactor_alpha: GLenum);
    core GetBufferParameteriv = glGetBufferParameteriv / gl3_3core_glGetBufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
    core UnmapBuffer = glUnmapBuffer / gl3_3core_glUnmapBuffer(target: GLenum) -> GLboolean;
    core GetBufferSubData = glGetBufferSubData / gl3_3core_glGetBufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *mut GLvoid);
    core BufferSubData = glBufferSubData / gl3_3core_glBufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *const GLvoid);
    core BufferData = glBufferData / gl3_3core_glBufferData(target: GLenum, size: GLsizeiptr, data: *const GLvoid, usage: GLenum);
    core IsBuffer = glIsBuffer / gl3_3core_glIsBuffer(buffer: GLuint) -> GLboolean;
    core GenBuffers = glGenBuffers / gl3_3core_glGenBuffers(n: GLsizei, buffers: *mut GLuint);
    core DeleteBuffers = glDeleteBuffers / gl3_3core_glDeleteBuffers(n: GLsizei, buffers: *const GLuint);
    core BindBuffer = glBindBuffer / gl3_3core_glBindBuffer(target: GLenum, buffer: GLuint);
    core GetQueryObjectuiv = glGetQueryObjectuiv / gl3_3core_glGetQueryObjectuiv(id: GLuint, pname: GLenum, params: *mut GLuint);
    core GetQueryObjectiv = glGetQueryObjectiv / gl3_3core_glGetQueryObjectiv(id: GLuint, pname: GLenum, params: *mut GLint);
    core GetQueryiv = glGetQueryiv / gl3_3core_glGetQueryiv(target: GLenum, pname: GLenum, params: *mut GLint);
    core EndQuery = glEndQuery / gl3_3core_glEndQuery(target: GLenum);
    core BeginQuery = glBeginQuery / gl3_3core_glBeginQuery(target: GLenum, id: GLuint);
    core IsQuery = glIsQuery / gl3_3core_glIsQuery(id: GLuint) -> GLboolean;
    core DeleteQueries = glDeleteQueries / gl3_3core_glDeleteQueries(n: GLsizei, ids: *const GLuint);
    core GenQueries = glGenQueries / gl3_3core_glGenQueries(n: GLsizei, ids: *mut GLuint);
    core VertexAttribPointer = glVertexAttribPointer / gl3_3core_glVertexAttribPointer(index: GLuint, size: GLint, gltype: GLenum, normalized: GLboolean, stride: GLsizei, offset: *const GLvoid);
    core ValidateProgram = glValidateProgram / gl3_3core_glValidateProgram(program: GLuint);
    core UniformMatrix4fv = glUniformMatrix4fv / gl3_3core_glUniformMatrix4fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    core UniformMatrix3fv = glUniformMatrix3fv / gl3_3core_glUniformMatrix3fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    core UniformMatrix2fv = glUniformMatrix2fv / gl3_3core_glUniformMatrix2fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    core Uniform4iv = glUniform4iv / gl3_3core_glUniform4iv(location: GLint, count: GLsizei, value: *const GLint);
    core Uniform3iv = glUniform3iv / gl3_3core_glUniform3iv(location: GLint, count: GLsizei, value: *const GLint);
    core Uniform2iv = glUniform2iv / gl3_3core_glUniform2iv(location: GLint, count: GLsizei, value: *const GLint);
    core Uniform1iv = glUniform1iv / gl3_3core_glUniform1iv(location: GLint, count: GLsizei, value: *const GLint);
    core Uniform4fv = glUniform4fv / gl3_3core_glUniform4fv(location: GLint, count: GLsizei, value: *const GLfloat);
    core Uniform3fv = glUniform3fv / gl3_3core_glUniform3fv(location: GLint, count: GLsizei, value: *const GLfloat);
    core Uniform2fv = glUniform2fv / gl3_3core_glUniform2fv(location: GLint, count: GLsizei, value: *const GLfloat);
    core Uniform1fv = glUniform1fv / gl3_3core_glUniform1fv(location: GLint, count: GLsizei, value: *const GLfloat);
    core Uniform4i = glUniform4i / gl3_3core_glUniform4i(location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint);
    core Uniform3i = glUniform3i / gl3_3core_glUniform3i(location: GLint, v0: GLint, v1: GLint, v2: GLint);
    core Uniform2i = glUniform2i / gl3_3core_glUniform2i(location: GLint, v0: GLint, v1: GLint);
    core Uniform1i = glUniform1i / gl3_3core_glUniform1i(location: GLint, v0: GLint);
    core Uniform4f = glUniform4f / gl3_3core_glUniform4f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
    core Uniform3f = glUniform3f / gl3_3core_glUniform3f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
    core Uniform2f = glUniform2f / gl3_3core_glUniform2f(location: GLint, v0: GLfloat, v1: GLfloat);
    core Uniform1f = glUniform1f / gl3_3core_glUniform1f(location: GLint, v0: GLfloat);
    core UseProgram = glUseProgram / gl3_3core_glUseProgram(program: GLuint);
    core ShaderSource = glShaderSource / gl3_3core_glShaderSource(shader: GLuint, count: GLsizei, source: *const *const GLchar, length: *const GLint);
    core LinkProgram = glLinkProgram / gl3_3core_glLinkProgram(program: GLuint);
    core IsShader = glIsShader / gl3_3core_glIsShader(shader: GLuint) -> GLboolean;
    core IsProgram = glIsProgram / gl3_3core_glIsProgram(program: GLuint) -> GLboolean;
    core GetVertexAttribiv = glGetVertexAttribiv / gl3_3core_glGetVertexAttribiv(index: GLuint, pname: GLenum, params: *mut GLint);
    core GetVertexAttribfv = glGetVertexAttribfv / gl3_3core_glGetVertexAttribfv(index: GLuint, pname: GLenum, params: *mut GLfloat);
    core GetVertexAttribdv = glGetVertexAttribdv / gl3_3core_glGetVertexAttribdv(index: GLuint, pname: GLenum, params: *mut GLdouble);
    core GetUniformiv = glGetUniformiv / gl3_3core_glGetUniformiv(program: GLuint, location: GLint, params: *mut GLint);
    core GetUniformfv = glGetUniformfv / gl3_3core_glGetUniformfv(program: GLuint, location: GLint, params: *mut GLfloat);
    core GetUniformLocation = glGetUniformLocation / gl3_3core_glGetUniformLocation(program: GLuint, name: *const GLchar) -> GLint;
    core GetShaderSource = glGetShaderSource / gl3_3core_glGetShaderSource(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei, source: *mut GLchar);
    core GetShaderInfoLog = glGetShaderInfoLog / gl3_3core_glGetShaderInfoLog(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
    core GetShaderiv = glGetShaderiv / gl3_3core_glGetShaderiv(shader: GLuint, pname: GLenum, params: *mut GLint);
    core GetProgramInfoLog = glGetProgramInfoLog / gl3_3core_glGetProgramInfoLog(program: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
    core GetProgramiv = glGetProgramiv / gl3_3core_glGetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint);
    core GetAttribLocation = glGetAttribLocation / gl3_3core_glGetAttribLocation(program: GLuint, name: *const GLchar) -> GLint;
    core GetAttachedShaders = glGetAttachedShaders / gl3_3core_glGetAttachedShaders(program: GLuint, max_count: GLsizei, count: *mut GLsizei, obj: *mut GLuint);
    core GetActiveUniform = glGetActiveUniform / gl3_3core_glGetActiveUniform(program: GLuint, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, size: *mut GLint, gltype: *mut GLenum, name: *mut GLchar);
    core GetActiveAttrib = glGetActiveAttrib / gl3_3core_glGetActiveAttrib(program: GLuint, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, size: *mut GLint, gltype: *mut GLenum, name: *mut GLchar);
    core EnableVertexAttribArray = glEnableVertexAttribArray / gl3_3core_glEnableVertexAttribArray(index: GLuint);
    core DisableVertexAttribArray = glDisableVertexAttribArray / gl3_3core_glDisableVertexAttribArray(index: GLuint);
    core DetachShader = glDetachShader / gl3_3core_glDetachShader(program: GLuint, shader: GLuint);
    core DeleteShader = glDeleteShader / gl3_3core_glDeleteShader(shader: GLuint);
    core DeleteProgram = glDeleteProgram / gl3_3core_glDeleteProgram(program: GLuint);
    core CreateShader = glCreateShader / gl3_3core_glCreateShader(gltype: GLenum) -> GLuint;
    core CreateProgram = glCreateProgram / gl3_3core_glCreateProgram() -> GLuint;
    core CompileShader = glCompileShader / gl3_3core_glCompileShader(shader: GLuint);
    core BindAttribLocation = glBindAttribLocation / gl3_3core_glBindAttribLocation(program: GLuint, index: GLuint, name: *const GLchar);
    core AttachShader = glAttachShader / gl3_3core_glAttachShader(program: GLuint, shader: GLuint);
    core StencilMaskSeparate = glStencilMaskSeparate / gl3_3core_glStencilMaskSeparate(face: GLenum, mask: GLuint);
    core StencilFuncSeparate = glStencilFuncSeparate / gl3_3core_glStencilFuncSeparate(face: GLenum, func: GLenum, reference: GLint, mask: GLuint);
    core StencilOpSeparate = glStencilOpSeparate / gl3_3core_glStencilOpSeparate(face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum);
    core DrawBuffers = glDrawBuffers / gl3_3core_glDrawBuffers(n: GLsizei, bufs: *const GLenum);
    core BlendEquationSeparate = glBlendEquationSeparate / gl3_3core_glBlendEquationSeparate(mode_rgb: GLenum, mode_alpha: GLenum);
    core UniformMatrix4x3fv = glUniformMatrix4x3fv / gl3_3core_glUniformMatrix4x3fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    core UniformMatrix3x4fv = glUniformMatrix3x4fv / gl3_3core_glUniformMatrix3x4fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    core UniformMatrix4x2fv = glUniformMatrix4x2fv / gl3_3core_glUniformMatrix4x2fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    core UniformMatrix2x4fv = glUniformMatrix2x4fv / gl3_3core_glUniformMatrix2x4fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    core UniformMatrix3x2fv = glUniformMatrix3x2fv / gl3_3core_glUniformMatrix3x2fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    core UniformMatrix2x3fv = glUniformMatrix2x3fv / gl3_3core_glUniformMatrix2x3fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    core IsVertexArray = glIsVertexArray / gl3_3core_glIsVertexArray(array: GLuint) -> GLboolean;
    core GenVertexArrays = glGenVertexArrays / gl3_3core_glGenVertexArrays(n: GLsizei, arrays: *mut GLuint);
    core DeleteVertexArrays = glDeleteVertexArrays / gl3_3core_glDeleteVertexArrays(n: GLsizei, arrays: *const GLuint);
    core BindVertexArray = glBindVertexArray / gl3_3core_glBindVertexArray(array: GLuint);
    core FlushMappedBufferRange = glFlushMappedBufferRange / gl3_3core_glFlushMappedBufferRange(target: GLenum, offset: GLintptr, length: GLsizeiptr);
    core FramebufferTextureLayer = glFramebufferTextureLayer / gl3_3core_glFramebufferTextureLayer(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint, layer: GLint);
    core RenderbufferStorageMultisample = glRenderbufferStorageMultisample / gl3_3core_glRenderbufferStorageMultisample(target: GLenum, samples: GLsizei, internal_format: GLenum, width: GLsizei, height: GLsizei);
    core BlitFramebuffer = glBlitFramebuffer / gl3_3core_glBlitFramebuffer(src_x0: GLint, src_y0: GLint, src_x1: GLint, src_y1: GLint, dst_x0: GLint, dst_y0: GLint, dst_x1: GLint, dst_y1: GLint, mask: GLbitfield, filter: GLenum);
    core GenerateMipmap = glGenerateMipmap / gl3_3core_glGenerateMipmap(target: GLenum);
    core GetFramebufferAttachmentParameteriv = glGetFramebufferAttachmentParameteriv / gl3_3core_glGetFramebufferAttachmentParameteriv(target: GLenum, attachment: GLenum, pname: GLenum, params: *mut GLint);
    core FramebufferRenderbuffer = glFramebufferRenderbuffer / gl3_3core_glFramebufferRenderbuffer(target: GLenum, attachment: GLenum, renderbuffertarget: GLenum, renderbuffer: GLuint);
    core FramebufferTexture3D = glFramebufferTexture3D / gl3_3core_glFramebufferTexture3D(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint, zoffset: GLint);
    core FramebufferTexture2D = glFramebufferTexture2D / gl3_3core_glFramebufferTexture2D(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint);
    core FramebufferTexture1D = glFramebufferTexture1D / gl3_3core_glFramebufferTexture1D(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint);
    core CheckFramebufferStatus = glCheckFramebufferStatus / gl3_3core_glCheckFramebufferStatus(target: GLenum) -> GLenum;
    core GenFramebuffers = glGenFramebuffers / gl3_3core_glGenFramebuffers(n: GLsizei, framebuffers: *mut GLuint);
    core DeleteFramebuffers = glDeleteFramebuffers / gl3_3core_glDeleteFramebuffers(n: GLsizei, framebuffers: *const GLuint);
    core BindFramebuffer = glBindFramebuffer / gl3_3core_glBindFramebuffer(target: GLenum, framebuffer: GLuint);
    core IsFramebuffer = glIsFramebuffer / gl3_3core_glIsFramebuffer(framebuffer: GLuint) -> GLboolean;
    core GetRenderbufferParameteriv = glGetRenderbufferParameteriv / gl3_3core_glGetRenderbufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
    core RenderbufferStorage = glRenderbufferStorage / gl3_3core_glRenderbufferStorage(target: GLenum, internal_format: GLenum, width: GLsizei, height: GLsizei);
    core GenRenderbuffers = glGenRenderbuffers / gl3_3core_glGenRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint);
    core DeleteRenderbuffers = glDeleteRenderbuffers / gl3_3core_glDeleteRenderbuffers(n: GLsizei, renderbuffers: *const GLuint);
    core BindRenderbuffer = glBindRenderbuffer / gl3_3core_glBindRenderbuffer(target: GLenum, renderbuffer: GLuint);
    core IsRenderbuffer = glIsRenderbuffer / gl3_3core_glIsRenderbuffer(renderbuffer: GLuint) -> GLboolean;
    core ClearBufferfi = glClearBufferfi / gl3_3core_glClearBufferfi(buffer: GLenum, drawbuffer: GLint, depth: GLfloat, stencil: GLint);
    core ClearBufferfv = glClearBufferfv / gl3_3core_glClearBufferfv(buffer: GLenum, drawbuffer: GLint, value: *const GLfloat);
    core ClearBufferuiv = glClearBufferuiv / gl3_3core_glClearBufferuiv(buffer: GLenum, drawbuffer: GLint, value: *const GLuint);
    core ClearBufferiv = glClearBufferiv / gl3_3core_glClearBufferiv(buffer: GLenum, drawbuffer: GLint, value: *const GLint);
    core GetTexParameterIuiv = glGetTexParameterIuiv / gl3_3core_glGetTexParameterIuiv(target: GLenum, pname: GLenum, params: *mut GLuint);
    core GetTexParameterIiv = glGetTexParameterIiv / gl3_3core_glGetTexParameterIiv(target: GLenum, pname: GLenum, params: *mut GLint);
    core TexParameterIuiv = glTexParameterIuiv / gl3_3core_glTexParameterIuiv(target: GLenum, pname: GLenum, params: *const GLuint);
    core TexParameterIiv = glTexParameterIiv / gl3_3core_glTexParameterIiv(target: GLenum, pname: GLenum, params: *const GLint);
    core Uniform4uiv = glUniform4uiv / gl3_3core_glUniform4uiv(location: GLint, count: GLsizei, value: *const GLuint);
    core Uniform3uiv = glUniform3uiv / gl3_3core_glUniform3uiv(location: GLint, count: GLsizei, value: *const GLuint);
    core Uniform2uiv = glUniform2uiv / gl3_3core_glUniform2uiv(location: GLint, count: GLsizei, value: *const GLuint);
    core Uniform1uiv = glUniform1uiv / gl3_3core_glUniform1uiv(location: GLint, count: GLsizei, value: *const GLuint);
    core Uniform4ui = glUniform4ui / gl3_3core_glUniform4ui(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint, v3: GLuint);
    core Uniform3ui = glUniform3ui / gl3_3core_glUniform3ui(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint);
    core Uniform2ui = glUniform2ui / gl3_3core_glUniform2ui(location: GLint, v0: GLuint, v1: GLuint);
    core Uniform1ui = glUniform1ui / gl3_3core_glUniform1ui(location: GLint, v0: GLuint);
    core GetFragDataLocation = glGetFragDataLocation / gl3_3core_glGetFragDataLocation(program: GLuint, name: *const GLchar) -> GLint;
    core BindFragDataLocation = glBindFragDataLocation / gl3_3core_glBindFragDataLocation(program: GLuint, color: GLuint, name: *const GLchar);
    core GetUniformuiv = glGetUniformuiv / gl3_3core_glGetUniformuiv(program: GLuint, location: GLint, params: *mut GLuint);
    core GetVertexAttribIuiv = glGetVertexAttribIuiv / gl3_3core_glGetVertexAttribIuiv(index: GLuint, pname: GLenum, params: *mut GLuint);
    core GetVertexAttribIiv = glGetVertexAttribIiv / gl3_3core_glGetVertexAttribIiv(index: GLuint, pname: GLenum, params: *mut GLint);
    core VertexAttribIPointer = glVertexAttribIPointer / gl3_3core_glVertexAttribIPointer(index: GLuint, size: GLint, gltype: GLenum, stride: GLsizei, pointer: *const GLvoid);
    core EndConditionalRender = glEndConditionalRender / gl3_3core_glEndConditionalRender();
    core BeginConditionalRender = glBeginConditionalRender / gl3_3core_glBeginConditionalRender(id: GLuint, mode: GLenum);
    core ClampColor = glClampColor / gl3_3core_glClampColor(target: GLenum, clamp: GLenum);
    core GetTransformFeedbackVarying = glGetTransformFeedbackVarying / gl3_3core_glGetTransformFeedbackVarying(program: GLuint, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, size: *mut GLsizei, gltype: *mut GLenum, name: *mut GLchar);
    core BindBufferBase = glBindBufferBase / gl3_3core_glBindBufferBase(target: GLenum, index: GLuint, buffer: GLuint);
    core BindBufferRange = glBindBufferRange / gl3_3core_glBindBufferRange(target: GLenum, index: GLuint, buffer: GLuint, offset: GLintptr, size: GLsizeiptr);
    core EndTransformFeedback = glEndTransformFeedback / gl3_3core_glEndTransformFeedback();
    core BeginTransformFeedback = glBeginTransformFeedback / gl3_3core_glBeginTransformFeedback(primitive_mode: GLenum);
    core IsEnabledi = glIsEnabledi / gl3_3core_glIsEnabledi(target: GLenum, index: GLuint) -> GLboolean;
    core Disablei = glDisablei / gl3_3core_glDisablei(target: GLenum, index: GLuint);
    core Enablei = glEnablei / gl3_3core_glEnablei(target: GLenum, index: GLuint);
    core GetIntegeri_v = glGetIntegeri_v / gl3_3core_glGetIntegeri_v(target: GLenum, index: GLuint, data: *mut GLint);
    core GetBooleani_v = glGetBooleani_v / gl3_3core_glGetBooleani_v(target: GLenum, index: GLuint, data: *mut GLboolean);
    core ColorMaski = glColorMaski / gl3_3core_glColorMaski(index: GLuint, r: GLboolean, g: GLboolean, b: GLboolean, a: GLboolean);
    core CopyBufferSubData = glCopyBufferSubData / gl3_3core_glCopyBufferSubData(read_target: GLenum, write_target: GLenum, read_offset: GLintptr, write_offset: GLintptr, size: GLsizeiptr);
    core UniformBlockBinding = glUniformBlockBinding / gl3_3core_glUniformBlockBinding(program: GLuint, v0: GLuint, v1: GLuint);
    core GetActiveUniformBlockName = glGetActiveUniformBlockName / gl3_3core_glGetActiveUniformBlockName(program: GLuint, uniform_block_index: GLuint, buf_size: GLsizei, length: *mut GLsizei, uniform_block_name: *mut GLchar);
    core GetActiveUniformBlockiv = glGetActiveUniformBlockiv / gl3_3core_glGetActiveUniformBlockiv(program: GLuint, uniform_block_index: GLuint, pname: GLenum, params: *mut GLint);
    core GetUniformBlockIndex = glGetUniformBlockIndex / gl3_3core_glGetUniformBlockIndex(program: GLuint, uniform_block_name: *const GLchar) -> GLuint;
    core GetActiveUniformName = glGetActiveUniformName / gl3_3core_glGetActiveUniformName(program: GLuint, uniform_index: GLuint, buf_size: GLsizei, length: *mut GLsizei, uniform_name: *mut GLchar);
    core GetActiveUniformsiv = glGetActiveUniformsiv / gl3_3core_glGetActiveUniformsiv(program: GLuint, uniform_count: GLsizei, uniform_indices: *const GLuint, pname: GLenum, params: *mut GLint);
    core PrimitiveRestartIndex = glPrimitiveRestartIndex / gl3_3core_glPrimitiveRestartIndex(index: GLuint);
    core TexBuffer = glTexBuffer / gl3_3core_glTexBuffer(target: GLenum, internal_format: GLenum, buffer: GLuint);
    core DrawElementsInstanced = glDrawElementsInstanced / gl3_3core_glDrawElementsInstanced(mode: GLenum, count: GLsizei, gltype: GLenum, indices: *const GLvoid, instancecount: GLsizei);
    core DrawArraysInstanced = glDrawArraysInstanced / gl3_3core_glDrawArraysInstanced(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei);
    core SampleMaski = glSampleMaski / gl3_3core_glSampleMaski(index: GLuint, mask: GLbitfield);
    core GetMultisamplefv = glGetMultisamplefv / gl3_3core_glGetMultisamplefv(pname: GLenum, index: GLuint, val: *mut GLfloat);
    core TexImage3DMultisample = glTexImage3DMultisample / gl3_3core_glTexImage3DMultisample(target: GLenum, samples: GLsizei, internal_format: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, fixedsamplelocations: GLboolean);
    core TexImage2DMultisample = glTexImage2DMultisample / gl3_3core_glTexImage2DMultisample(target: GLenum, samples: GLsizei, internal_format: GLint, width: GLsizei, height: GLsizei, fixedsamplelocations: GLboolean);
    core GetSynciv = glGetSynciv / gl3_3core_glGetSynciv(sync: GLsync, pname: GLenum, buf_size: GLsizei, length: *mut GLsizei, values: *mut GLint);
    core GetInteger64v = glGetInteger64v / gl3_3core_glGetInteger64v(pname: GLenum, params: *mut GLint64);
    core WaitSync = glWaitSync / gl3_3core_glWaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64);
    core ClientWaitSync = glClientWaitSync / gl3_3core_glClientWaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum;
    core DeleteSync = glDeleteSync / gl3_3core_glDeleteSync(sync: GLsync);
    core IsSync = glIsSync / gl3_3core_glIsSync(sync: GLsync) -> GLboolean;
    core FenceSync = glFenceSync / gl3_3core_glFenceSync(condition: GLenum, flags: GLbitfield) -> GLsync;
    core ProvokingVertex = glProvokingVertex / gl3_3core_glProvokingVertex(mode: GLenum);
    core DrawElementsInstancedBaseVertex = glDrawElementsInstancedBaseVertex / gl3_3core_glDrawElementsInstancedBaseVertex(mode: GLenum, count: GLsizei, gltype: GLenum, indices: *const GLvoid, instancecount: GLsizei, basevertex: GLint);
    core DrawRangeElementsBaseVertex = glDrawRangeElementsBaseVertex / gl3_3core_glDrawRangeElementsBaseVertex(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei, gltype: GLenum, indices: *const GLvoid, basevertex: GLint);
    core DrawElementsBaseVertex = glDrawElementsBaseVertex / gl3_3core_glDrawElementsBaseVertex(mode: GLenum, count: GLsizei, gltype: GLenum, indices: *const GLvoid, basevertex: GLint);
    core FramebufferTexture = glFramebufferTexture / gl3_3core_glFramebufferTexture(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint);
    core GetBufferParameteri64v = glGetBufferParameteri64v / gl3_3core_glGetBufferParameteri64v(target: GLenum, pname: GLenum, params: *mut GLint64);
    core GetInteger64i_v = glGetInteger64i_v / gl3_3core_glGetInteger64i_v(target: GLenum, index: GLuint, data: *mut GLint64);
    core VertexAttribP4uiv = glVertexAttribP4uiv / gl3_3core_glVertexAttribP4uiv(index: GLuint, gltype: GLenum, normalized: GLboolean, value: *const GLuint);
    core VertexAttribP4ui = glVertexAttribP4ui / gl3_3core_glVertexAttribP4ui(index: GLuint, gltype: GLenum, normalized: GLboolean, value: GLuint);
    core VertexAttribP3uiv = glVertexAttribP3uiv / gl3_3core_glVertexAttribP3uiv(index: GLuint, gltype: GLenum, normalized: GLboolean, value: *const GLuint);
    core VertexAttribP3ui = glVertexAttribP3ui / gl3_3core_glVertexAttribP3ui(index: GLuint, gltype: GLenum, normalized: GLboolean, value: GLuint);
    core VertexAttribP2uiv = glVertexAttribP2uiv / gl3_3core_glVertexAttribP2uiv(index: GLuint, gltype: GLenum, normalized: GLboolean, value: *const GLuint);
    core VertexAttribP2ui = glVertexAttribP2ui / gl3_3core_glVertexAttribP2ui(index: GLuint, gltype: GLenum, normalized: GLboolean, value: GLuint);
    core VertexAttribP1uiv = glVertexAttribP1uiv / gl3_3core_glVertexAttribP1uiv(index: GLuint, gltype: GLenum, normalized: GLboolean, value: *const GLuint);
    core VertexAttribP1ui = glVertexAttribP1ui / gl3_3core_glVertexAttribP1ui(index: GLuint, gltype: GLenum, normalized: GLboolean, value: GLuint);
    optional SecondaryColorP3uiv = glSecondaryColorP3uiv / gl3_3core_glSecondaryColorP3uiv(gltype: GLenum, color: *const GLuint);
    optional SecondaryColorP3ui = glSecondaryColorP3ui / gl3_3core_glSecondaryColorP3ui(gltype: GLenum, color: GLuint);
    optional ColorP4uiv = glColorP4uiv / gl3_3core_glColorP4uiv(gltype: GLenum, color: *const GLuint);
    optional ColorP4ui = glColorP4ui / gl3_3core_glColorP4ui(gltype: GLenum, color: GLuint);
    optional ColorP3uiv = glColorP3uiv / gl3_3core_glColorP3uiv(gltype: GLenum, color: *const GLuint);
    optional ColorP3ui = glColorP3ui / gl3_3core_glColorP3ui(gltype: GLenum, color: GLuint);
    optional NormalP3uiv = glNormalP3uiv / gl3_3core_glNormalP3uiv(gltype: GLenum, coords: *const GLuint);
    optional NormalP3ui = glNormalP3ui / gl3_3core_glNormalP3ui(gltype: GLenum, coords: GLuint);
    optional MultiTexCoordP4uiv = glMultiTexCoordP4uiv / gl3_3core_glMultiTexCoordP4uiv(texture: GLenum, gltype: GLenum, coords: *const GLuint);
    optional MultiTexCoordP4ui = glMultiTexCoordP4ui / gl3_3core_glMultiTexCoordP4ui(texture: GLenum, gltype: GLenum, coords: GLuint);
    optional MultiTexCoordP3uiv = glMultiTexCoordP3uiv / gl3_3core_glMultiTexCoordP3uiv(texture: GLenum, gltype: GLenum, coords: *const GLuint);
    optional MultiTexCoordP3ui = glMultiTexCoordP3ui / gl3_3core_glMultiTexCoordP3ui(texture: GLenum, gltype: GLenum, coords: GLuint);
    optional MultiTexCoordP2uiv = glMultiTexCoordP2uiv / gl3_3core_glMultiTexCoordP2uiv(texture: GLenum, gltype: GLenum, coords: *const GLuint);
    optional MultiTexCoordP2ui = glMultiTexCoordP2ui / gl3_3core_glMultiTexCoordP2ui(texture: GLenum, gltype: GLenum, coords: GLuint);
    optional MultiTexCoordP1uiv = glMultiTexCoordP1uiv / gl3_3core_glMultiTexCoordP1uiv(texture: GLenum, gltype: GLenum, coords: *const GLuint);
    optional MultiTexCoordP1ui = glMultiTexCoordP1ui / gl3_3core_glMultiTexCoordP1ui(texture: GLenum, gltype: GLenum, coords: GLuint);
    optional TexCoordP4uiv = glTexCoordP4uiv / gl3_3core_glTexCoordP4uiv(gltype: GLenum, coords: *const GLuint);
    optional TexCoordP4ui = glTexCoordP4ui / gl3_3core_glTexCoordP4ui(gltype: GLenum, coords: GLuint);
    optional TexCoordP3uiv = glTexCoordP3uiv / gl3_3core_glTexCoordP3uiv(gltype: GLenum, coords: *const GLuint);
    optional TexCoordP3ui = glTexCoordP3ui / gl3_3core_glTexCoordP3ui(gltype: GLenum, coords: GLuint);
    optional TexCoordP2uiv = glTexCoordP2uiv / gl3_3core_glTexCoordP2uiv(gltype: GLenum, coords: *const GLuint);
    optional TexCoordP2ui = glTexCoordP2ui / gl3_3core_glTexCoordP2ui(gltype: GLenum, coords: GLuint);
    optional TexCoordP1uiv = glTexCoordP1uiv / gl3_3core_glTexCoordP1uiv(gltype: GLenum, coords: *const GLuint);
    optional TexCoordP1ui = glTexCoordP1ui / gl3_3core_glTexCoordP1ui(gltype: GLenum, coords: GLuint);
    optional VertexP4uiv = glVertexP4uiv / gl3_3core_glVertexP4uiv(gltype: GLenum, value: *const GLuint);
    optional VertexP4ui = glVertexP4ui / gl3_3core_glVertexP4ui(gltype: GLenum, value: GLuint);
    optional VertexP3uiv = glVertexP3uiv / gl3_3core_glVertexP3uiv(gltype: GLenum, value: *const GLuint);
    optional VertexP3ui = glVertexP3ui / gl3_3core_glVertexP3ui(gltype: GLenum, value: GLuint);
    optional VertexP2uiv = glVertexP2uiv / gl3_3core_glVertexP2uiv(gltype: GLenum, value: *const GLuint);
    optional VertexP2ui = glVertexP2ui / gl3_3core_glVertexP2ui(gltype: GLenum, value: GLuint);
    core GetQueryObjectui64v = glGetQueryObjectui64v / gl3_3core_glGetQueryObjectui64v(id: GLuint, pname: GLenum, params: *mut GLuint64);
    core GetQueryObjecti64v = glGetQueryObjecti64v / gl3_3core_glGetQueryObjecti64v(id: GLuint, pname: GLenum, params: *mut GLint64);
    core QueryCounter = glQueryCounter / gl3_3core_glQueryCounter(id: GLuint, target: GLenum);
    core GetSamplerParameterIuiv = glGetSamplerParameterIuiv / gl3_3core_glGetSamplerParameterIuiv(sampler: GLuint, pname: GLenum, params: *mut GLuint);
    core GetSamplerParameterfv = glGetSamplerParameterfv / gl3_3core_glGetSamplerParameterfv(sampler: GLuint, pname: GLenum, params: *mut GLfloat);
    core GetSamplerParameterIiv = glGetSamplerParameterIiv / gl3_3core_glGetSamplerParameterIiv(sampler: GLuint, pname: GLenum, params: *mut GLint);
    core GetSamplerParameteriv = glGetSamplerParameteriv / gl3_3core_glGetSamplerParameteriv(sampler: GLuint, pname: GLenum, params: *mut GLint);
    core SamplerParameterIuiv = glSamplerParameterIuiv / gl3_3core_glSamplerParameterIuiv(sampler: GLuint, pname: GLenum, param: *const GLuint);
    core SamplerParameterIiv = glSamplerParameterIiv / gl3_3core_glSamplerParameterIiv(sampler: GLuint, pname: GLenum, param: *const GLint);
    core SamplerParameterfv = glSamplerParameterfv / gl3_3core_glSamplerParameterfv(sampler: GLuint, pname: GLenum, param: *const GLfloat);
    core SamplerParameterf = glSamplerParameterf / gl3_3core_glSamplerParameterf(sampler: GLuint, pname: GLenum, param: GLfloat);
    core SamplerParameteriv = glSamplerParameteriv / gl3_3core_glSamplerParameteriv(sampler: GLuint, pname: GLenum, param: *const GLint);
    core SamplerParameteri = glSamplerParameteri / gl3_3core_glSamplerParameteri(sampler: GLuint, pname: GLenum, param: GLint);
    core BindSampler = glBindSampler / gl3_3core_glBindSampler(unit: GLuint, sampler: GLuint);
    core IsSampler = glIsSampler / gl3_3core_glIsSampler(sampler: GLuint) -> GLboolean;
    core DeleteSamplers = glDeleteSamplers / gl3_3core_glDeleteSamplers(count: GLsizei, samplers: *const GLuint);
    core GenSamplers = glGenSamplers / gl3_3core_glGenSamplers(count: GLsizei, samplers: *mut GLuint);
    core GetFragDataIndex = glGetFragDataIndex / gl3_3core_glGetFragDataIndex(program: GLuint, name: *const GLchar) -> GLint;
    core BindFragDataLocationIndexed = glBindFragDataLocationIndexed / gl3_3core_glBindFragDataLocationIndexed(program: GLuint, color_number: GLuint, index: GLuint, name: *const GLchar);
    core VertexAttribDivisor = glVertexAttribDivisor / gl3_3core_glVertexAttribDivisor(index: GLuint, divisor: GLuint);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Profile;

    #[test]
    fn catalogue_covers_the_whole_profile() {
        assert_eq!(EntryPoint::COUNT, 310);
        let optional = EntryPoint::ALL.iter().filter(|e| e.is_optional());
        assert_eq!(optional.count(), 32);
    }

    #[test]
    fn slot_indices_are_dense() {
        for (i, entry) in EntryPoint::ALL.iter().enumerate() {
            assert_eq!(entry.index(), i);
        }
    }

    #[test]
    fn names_round_trip() {
        for &entry in EntryPoint::ALL {
            assert_eq!(EntryPoint::from_name(entry.name()), Some(entry));
            assert_eq!(entry.c_name().to_str(), Ok(entry.name()));
        }
        assert_eq!(EntryPoint::from_name("glBegin"), None);
        assert_eq!(EntryPoint::from_name("Viewport"), None);
    }

    #[test]
    fn export_names_carry_the_profile_prefix() {
        let prefix = Profile::Gl33Core.export_prefix();
        for &entry in EntryPoint::ALL {
            let export = entry.export_name();
            assert_eq!(export.strip_prefix(prefix), Some(entry.name()));
        }
    }

    #[test]
    fn requirement_policy() {
        let cases = [
            (EntryPoint::GetIntegerv, Requirement::Core),
            (EntryPoint::VertexAttribP4ui, Requirement::Core),
            (EntryPoint::FenceSync, Requirement::Core),
            (EntryPoint::VertexP2ui, Requirement::Optional),
            (EntryPoint::Indexub, Requirement::Optional),
            (EntryPoint::MultiTexCoordP1uiv, Requirement::Optional),
        ];
        for (entry, requirement) in cases {
            assert_eq!(entry.requirement(), requirement, "{entry}");
        }
    }
}
