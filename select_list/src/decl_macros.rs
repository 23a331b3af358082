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

/// Wrapper for [`pretty_assertions::assert_eq!`] macro, which prints a colored diff when
/// the two sides differ.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Build a `Vec` of [`crate::Item`]s, where each label is also used as the value.
///
/// ```rust
/// use r3bl_select_list::*;
///
/// let items = items!["red", "green", "blue"];
/// assert_eq!(items.len(), 3);
/// assert_eq!(items[1].value, "green");
/// ```
#[macro_export]
macro_rules! items {
    (
        $($label: expr),*
        $(,)* /* Optional trailing comma https://stackoverflow.com/a/43143459/2085356. */
    ) => {
        {
            #[allow(unused_mut)]
            let mut it: Vec<$crate::Item<String>> = Vec::new();
            $(
                it.push($crate::Item::from($label));
            )*
            it
        }
    };
}
