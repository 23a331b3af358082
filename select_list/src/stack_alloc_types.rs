/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use smallvec::SmallVec;

/// Most select lists show a handful of rows at a time, so the visible slice and the
/// rendered cells live on the stack until they outgrow this size.
pub const DEFAULT_LIST_STORAGE_SIZE: usize = 16;

/// Stack allocated vec that spills to the heap when it outgrows
/// [`DEFAULT_LIST_STORAGE_SIZE`].
pub type InlineVec<T> = SmallVec<[T; DEFAULT_LIST_STORAGE_SIZE]>;
