//! Declaration macro for compile-time enumerations.

/// Declares an enumeration with generated accessors.
///
/// ```
/// enumkit::enumeration! {
/// 	/// Cars, by model.
/// 	pub Volkswagen {
/// 		JETTA, RABBIT, BEETLE, THING = 400, EURO_VAN = 1,
/// 	}
/// }
///
/// fn main() {
/// 	assert_eq!(Volkswagen::thing().value(), 400);
/// 	assert_eq!(*Volkswagen::rabbit(), "RABBIT");
/// 	assert_eq!(Volkswagen::registry().by_name("beet", false).unwrap().value(), 3);
/// }
/// ```
///
/// Generates a unit struct with `registry()`, returning the lazily built
/// [`Registry`](crate::Registry), and one lowercase accessor per name. The
/// declaration is also submitted for [`import_extension`](crate::import_extension).
///
/// A declaration that violates uniqueness panics the first time its registry
/// is touched.
#[macro_export]
macro_rules! enumeration {
	(@entry $name:ident) => {
		$crate::Entry::Bare(::std::string::String::from(stringify!($name)))
	};
	(@entry $name:ident = $value:expr) => {
		$crate::Entry::Valued(::std::string::String::from(stringify!($name)), $value)
	};
	(
		$(#[$attr:meta])*
		$vis:vis $ty:ident $( ( first = $first:expr ) )? {
			$( $name:ident $( = $value:expr )? ),* $(,)?
		}
	) => {
		$(#[$attr])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		$vis struct $ty;

		$crate::paste::paste! {
			#[allow(non_upper_case_globals)]
			static [<ENUMERATION_DEF_ $ty>]: $crate::EnumerationDef = $crate::EnumerationDef {
				module: module_path!(),
				name: stringify!($ty),
				registry: $ty::registry,
			};

			$crate::inventory::submit!($crate::EnumerationReg(&[<ENUMERATION_DEF_ $ty>]));

			#[allow(dead_code)]
			impl $ty {
				/// Returns the registry backing this enumeration.
				pub fn registry() -> &'static $crate::Registry {
					static REGISTRY: ::std::sync::LazyLock<$crate::Registry> = ::std::sync::LazyLock::new(|| {
						#[allow(unused_mut)]
						let mut builder = $crate::Registry::builder(stringify!($ty));
						$( builder = builder.first_value($first); )?
						$( builder.push($crate::enumeration!(@entry $name $( = $value )?)); )*
						match builder.build() {
							Ok(registry) => registry,
							Err(e) => panic!("enumeration {}: {}", stringify!($ty), e),
						}
					});
					&REGISTRY
				}

				$(
					/// Returns the item with this name.
					pub fn [<$name:lower>]() -> &'static $crate::Item {
						match Self::registry().by_name(stringify!($name), true) {
							Ok(item) => item,
							Err(e) => unreachable!("enumeration {}: {}", stringify!($ty), e),
						}
					}
				)*
			}
		}
	};
}
